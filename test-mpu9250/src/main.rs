use std::{env, process};

use mpu9250::Mpu9250;

mod simulated;
use simulated::*;

static DEFAULT_SAMPLES: usize = 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let samples = match env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(err) => {
                log::error!("Invalid sample count {:?}: {}", arg, err);
                process::exit(2);
            }
        },
        None => DEFAULT_SAMPLES,
    };

    let mut mpu = Mpu9250::new(SimulatedMpu::new());
    if let Err(err) = mpu.init(&mut StdDelay) {
        log::error!("Failed to initialize MPU9250: {}", err);
        process::exit(1);
    }

    let scale = mpu.gyro_scale().as_scale_factor();
    println!("index,x,y,z,x_dps,y_dps,z_dps");
    for i in 0..samples {
        match mpu.read_gyro() {
            Ok(sample) => println!(
                "{},{},{},{},{:.3},{:.3},{:.3}",
                i, sample.x, sample.y, sample.z,
                sample.x as f32 / scale, sample.y as f32 / scale, sample.z as f32 / scale,
            ),
            Err(err) => {
                log::error!("Failed to read gyroscope: {}", err);
                process::exit(1);
            }
        }
    }
}

use core::fmt;

/// Errors returned by the driver, generic over the error type of the underlying bus.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E>
{
    /// The bus transaction failed or timed out.
    Bus(E),
    /// The chip answered, but its `WHO_AM_I` register held this unexpected value.
    IdentityMismatch(u8),
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Bus error: {:?}", err),
            Self::IdentityMismatch(id) => write!(f, "Unexpected device id: {:#04x}", id),
        }
    }
}

use rand::{distributions::Alphanumeric, Rng};

pub const CODE_LENGTH: usize = 8;

/// Upper bound on collision retries before a create gives up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Draws a retrieval code from `[A-Za-z0-9]`.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
	(0..CODE_LENGTH).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

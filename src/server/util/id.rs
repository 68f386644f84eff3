use rand::Rng;

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_LENGTH: usize = 16;
const INVITE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const INVITE_LENGTH: usize = 6;

/// Generates a random lowercase alphanumeric id for records created without one.
pub fn generate_id() -> String {
    let mut rng = rand::rng();

    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARSET.len());
            ID_CHARSET[idx] as char
        })
        .collect()
}

/// Generates a short uppercase code players type in to find a group.
pub fn generate_invite_code() -> String {
    let mut rng = rand::rng();

    (0..INVITE_LENGTH)
        .map(|_| INVITE_CHARSET[rng.random_range(0..INVITE_CHARSET.len())] as char)
        .collect()
}

/// Returns the provided id, or a fresh one when absent or blank.
pub fn id_or_generate(id: Option<String>) -> String {
    id.filter(|id| !id.trim().is_empty())
        .unwrap_or_else(generate_id)
}

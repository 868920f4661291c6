use rand::{distributions::Alphanumeric, Rng};

/// Random alphanumeric string, used for api keys and webhook keys
pub fn create_random_secret(secret_len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

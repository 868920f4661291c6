use std::collections::HashMap;

use crate::{Entity, ID};

pub type Metadata = HashMap<String, String>;

const MAX_METADATA_ENTRIES: usize = 30;
const MAX_METADATA_KEY_LEN: usize = 64;
const MAX_METADATA_VALUE_LEN: usize = 512;

pub trait Meta: Entity {
    fn metadata(&self) -> &Metadata;
    /// Retrives the account_id associated with this entity, which
    /// is useful to know when querying on the metadata
    fn account_id(&self) -> &ID;
}

/// Free-form metadata is attached by clients (e.g. marina names, harbour codes)
/// and has to stay small enough to be stored inline with the entity.
pub fn is_valid_metadata(metadata: &Metadata) -> bool {
    metadata.len() <= MAX_METADATA_ENTRIES
        && metadata.iter().all(|(key, value)| {
            !key.is_empty()
                && key.len() <= MAX_METADATA_KEY_LEN
                && value.len() <= MAX_METADATA_VALUE_LEN
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validates_metadata_sizes() {
        let mut metadata = Metadata::new();
        assert!(is_valid_metadata(&metadata));
        metadata.insert("marina".into(), "Porto Cervo".into());
        assert!(is_valid_metadata(&metadata));
        metadata.insert("".into(), "empty key".into());
        assert!(!is_valid_metadata(&metadata));

        let too_many = (0..31)
            .map(|i| (format!("k{}", i), "v".to_string()))
            .collect::<Metadata>();
        assert!(!is_valid_metadata(&too_many));
    }
}

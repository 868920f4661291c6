use seaboo_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

/// Inserts `val` only when `check` finds nothing standing in the way.
/// The check and the insert happen under the same lock.
pub fn insert_unless<T: Clone, R, F: FnOnce(&[T]) -> Option<R>>(
    val: &T,
    collection: &Mutex<Vec<T>>,
    check: F,
) -> Option<R> {
    let mut collection = collection.lock().unwrap();
    if let Some(obstacle) = check(&collection) {
        return Some(obstacle);
    }
    collection.push(val.clone());
    None
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    if let Some(existing) = collection.iter_mut().find(|item| item.id() == val.id()) {
        *existing = val.clone();
    }
}

/// Replaces the stored item with `val` only when `check` accepts the stored one
pub fn save_if<T: Clone + Entity, F: FnOnce(&T) -> bool>(
    val: &T,
    collection: &Mutex<Vec<T>>,
    check: F,
) -> bool {
    let mut collection = collection.lock().unwrap();
    match collection.iter_mut().find(|item| item.id() == val.id()) {
        Some(existing) if check(existing) => {
            *existing = val.clone();
            true
        }
        _ => false,
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    let collection = collection.lock().unwrap();
    collection
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

/// Deletes every item matching `compare` and returns how many were deleted
pub fn delete_by<T, F: Fn(&T) -> bool>(collection: &Mutex<Vec<T>>, compare: F) -> u64 {
    let mut collection = collection.lock().unwrap();
    let before = collection.len();
    collection.retain(|item| !compare(item));
    (before - collection.len()) as u64
}

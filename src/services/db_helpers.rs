use mongodb::bson::oid::ObjectId;

use crate::errors::{AppError, AppResult};

/// Parses a path id. A value that is not an ObjectId cannot name a stored
/// document, so it is reported with the caller's not-found message.
pub fn parse_object_id(id: &str, not_found_message: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(not_found_message.to_string()))
}

/// Returns the items in the order given by `ids`, skipping dangling references.
pub fn order_by_ids<T>(ids: &[ObjectId], items: Vec<T>, id_of: impl Fn(&T) -> ObjectId) -> Vec<T> {
    let mut items: Vec<Option<T>> = items.into_iter().map(Some).collect();

    ids.iter()
        .filter_map(|id| {
            items
                .iter_mut()
                .find(|slot| slot.as_ref().map(&id_of) == Some(*id))
                .and_then(Option::take)
        })
        .collect()
}

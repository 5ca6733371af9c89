//! Nearest-driver selection

use crate::party::User;
use farekit_common::GeoPoint;
use ordered_float::OrderedFloat;

/// Pick the available driver closest to `location` by planar distance.
///
/// Returns `None` when no driver is available. Ties go to the earlier
/// element of `users`.
pub fn nearest_driver<'a, I>(location: GeoPoint, users: I) -> Option<&'a User>
where
    I: IntoIterator<Item = &'a User>,
{
    users
        .into_iter()
        .filter(|user| user.is_available_driver())
        .min_by_key(|user| OrderedFloat(location.distance_to(&user.location)))
}

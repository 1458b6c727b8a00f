//! Grouping of listed records by their city.

use crate::types::DbId;

/// Identity of a city as shown in grouped listings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityKey {
    pub location_id: DbId,
    pub city: String,
    pub state: String,
}

/// Group `rows` by city.
///
/// Groups are ordered by state, then city name, then location id; members
/// keep their input order. Cities with no rows never appear.
pub fn group_by_city<T, I>(rows: I) -> Vec<(CityKey, Vec<T>)>
where
    I: IntoIterator<Item = (CityKey, T)>,
{
    let mut groups: Vec<(CityKey, Vec<T>)> = Vec::new();
    for (key, item) in rows {
        match groups.iter_mut().find(|(k, _)| k.location_id == key.location_id) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups.sort_by(|(a, _), (b, _)| {
        a.state
            .cmp(&b.state)
            .then_with(|| a.city.cmp(&b.city))
            .then(a.location_id.cmp(&b.location_id))
    });
    groups
}

//! Normalization of provider wire records into domain [`Place`] values.

use rivalrank_core::{Coordinate, Place};

use crate::types::PlaceRecord;

/// Converts a provider [`PlaceRecord`] into a domain [`Place`].
///
/// Missing fields get the documented defaults: rating `0.0`, review count
/// `0`, location `None`. The address prefers the detail endpoint's
/// `formatted_address`, falling back to the nearby-search `vicinity`.
#[must_use]
pub fn normalize_place(record: PlaceRecord) -> Place {
    let location = record.geometry.map(|g| Coordinate {
        lat: g.location.lat,
        lng: g.location.lng,
    });
    let address = record.formatted_address.or(record.vicinity);

    Place {
        place_id: record.place_id,
        name: record.name,
        rating: record.rating.unwrap_or(0.0),
        review_count: record.user_ratings_total.unwrap_or(0),
        location,
        address,
        type_tags: record.types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GeometryRecord, LatLngRecord};

    fn full_record() -> PlaceRecord {
        PlaceRecord {
            place_id: "id-1".to_string(),
            name: "Luigi's".to_string(),
            rating: Some(4.5),
            user_ratings_total: Some(120),
            geometry: Some(GeometryRecord {
                location: LatLngRecord {
                    lat: 45.07,
                    lng: 7.69,
                },
            }),
            formatted_address: Some("Via Roma 1".to_string()),
            vicinity: Some("Via Roma".to_string()),
            types: vec!["restaurant".to_string()],
        }
    }

    #[test]
    fn full_record_maps_all_fields() {
        let place = normalize_place(full_record());
        assert_eq!(place.place_id, "id-1");
        assert_eq!(place.name, "Luigi's");
        assert!((place.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(place.review_count, 120);
        let loc = place.location.expect("location should be present");
        assert!((loc.lat - 45.07).abs() < f64::EPSILON);
        assert_eq!(place.address.as_deref(), Some("Via Roma 1"));
        assert_eq!(place.type_tags, vec!["restaurant"]);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let mut record = full_record();
        record.rating = None;
        record.user_ratings_total = None;
        record.geometry = None;
        record.formatted_address = None;
        record.vicinity = None;

        let place = normalize_place(record);
        assert!((place.rating - 0.0).abs() < f64::EPSILON);
        assert_eq!(place.review_count, 0);
        assert!(place.location.is_none());
        assert!(place.address.is_none());
    }

    #[test]
    fn address_falls_back_to_vicinity() {
        let mut record = full_record();
        record.formatted_address = None;
        let place = normalize_place(record);
        assert_eq!(place.address.as_deref(), Some("Via Roma"));
    }
}

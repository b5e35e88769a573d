//! Sorting address components into address fields.

use super::types::{Address, Component, ComponentKind};

/// Address fields filled from components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAddress {
    pub country: String,
    pub province: String,
    pub region: String,
    pub area: String,
    pub city: String,
    pub street: String,
    pub house: String,
}

impl PartialAddress {
    pub(crate) fn apply_to(self, address: &mut Address) {
        address.country = self.country;
        address.province = self.province;
        address.region = self.region;
        address.area = self.area;
        address.city = self.city;
        address.street = self.street;
        address.house = self.house;
    }
}

/// Classify components in the order received.
///
/// The service can return two `province` entries for different tiers (a
/// federal subject and a district inside it): `province` takes the first
/// non-blank one, every later one fills `region`. Kinds with no address
/// field and unknown kinds are skipped.
pub fn classify(components: &[Component]) -> PartialAddress {
    let mut out = PartialAddress::default();

    for component in components {
        let name = component.name.clone();
        match ComponentKind::from_wire(&component.kind) {
            ComponentKind::Country => out.country = name,
            ComponentKind::Province if out.province.is_empty() => out.province = name,
            ComponentKind::Province => out.region = name,
            ComponentKind::Area => out.area = name,
            ComponentKind::Locality => out.city = name,
            ComponentKind::Street => out.street = name,
            ComponentKind::House => out.house = name,
            ComponentKind::Other
            | ComponentKind::Metro
            | ComponentKind::District
            | ComponentKind::Hydro
            | ComponentKind::Railway
            | ComponentKind::Route
            | ComponentKind::Vegetation
            | ComponentKind::Airport
            | ComponentKind::Unknown => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(kind: &str, name: &str) -> Component {
        Component::new(kind, name)
    }

    #[test]
    fn test_province_then_region() {
        let parts = classify(&[
            c("country", "Russia"),
            c("province", "A"),
            c("province", "B"),
            c("locality", "Moscow"),
        ]);
        assert_eq!(parts.country, "Russia");
        assert_eq!(parts.province, "A");
        assert_eq!(parts.region, "B");
        assert_eq!(parts.city, "Moscow");
    }

    #[test]
    fn test_blank_province_does_not_stage_region() {
        let parts = classify(&[c("province", ""), c("province", "B")]);
        assert_eq!(parts.province, "B");
        assert!(parts.region.is_empty());

        let parts = classify(&[c("province", ""), c("province", "A"), c("province", "B")]);
        assert_eq!(parts.province, "A");
        assert_eq!(parts.region, "B");
    }

    #[test]
    fn test_third_province_overwrites_region_only() {
        let parts = classify(&[c("province", "A"), c("province", "B"), c("province", "C")]);
        assert_eq!(parts.province, "A");
        assert_eq!(parts.region, "C");
    }

    #[test]
    fn test_full_house_address() {
        let parts = classify(&[
            c("country", "Россия"),
            c("province", "Центральный федеральный округ"),
            c("province", "Москва"),
            c("locality", "Москва"),
            c("street", "улица Новый Арбат"),
            c("house", "24"),
        ]);
        assert_eq!(parts.province, "Центральный федеральный округ");
        assert_eq!(parts.region, "Москва");
        assert_eq!(parts.street, "улица Новый Арбат");
        assert_eq!(parts.house, "24");
        assert!(parts.area.is_empty());
    }

    #[test]
    fn test_unmapped_and_unknown_kinds_are_skipped() {
        let parts = classify(&[
            c("metro", "Арбатская"),
            c("district", "Арбат"),
            c("entrance", "1"),
            c("", "nothing"),
            c("area", "городской округ"),
        ]);
        assert_eq!(
            parts,
            PartialAddress {
                area: "городской округ".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classify(&[]), PartialAddress::default());
    }
}

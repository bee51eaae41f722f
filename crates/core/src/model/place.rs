/// Map centre used when a coordinate label cannot be parsed.
pub const BASEL_CENTER: Coordinates = Coordinates {
    latitude: 47.5584,
    longitude: 7.5733,
};

const FACT_FALLBACK_CHARS: usize = 200;
const GENERIC_FACT: &str = "This place is one of the key landmarks in Basel and is worth visiting.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parse a label such as `47.5859° N, 7.5890° E`.
    ///
    /// Missing or unparsable components fall back to [`BASEL_CENTER`]; an `S` or `W`
    /// suffix flips the sign.
    #[must_use]
    pub fn parse_label(label: &str) -> Self {
        let clean = label.replace('°', "");
        let clean = clean.split_whitespace().collect::<Vec<_>>().join(" ");

        let mut parts = clean.split(',');
        let (Some(lat_part), Some(lon_part)) = (parts.next(), parts.next()) else {
            return BASEL_CENTER;
        };
        let lat_part = lat_part.trim();
        let lon_part = lon_part.trim();

        let latitude = leading_float(lat_part).unwrap_or(BASEL_CENTER.latitude);
        let longitude = leading_float(lon_part).unwrap_or(BASEL_CENTER.longitude);

        let lat_sign = if lat_part.to_uppercase().contains('S') { -1.0 } else { 1.0 };
        let lon_sign = if lon_part.to_uppercase().contains('W') { -1.0 } else { 1.0 };

        Self {
            latitude: latitude * lat_sign,
            longitude: longitude * lon_sign,
        }
    }
}

/// Longest numeric prefix of `s`, parsed as a float.
fn leading_float(s: &str) -> Option<f64> {
    let end = s
        .char_indices()
        .find(|(idx, c)| !(c.is_ascii_digit() || *c == '.' || (*idx == 0 && (*c == '-' || *c == '+'))))
        .map_or(s.len(), |(idx, _)| idx);
    s[..end].parse().ok()
}

/// A point of interest in the guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    id: &'static str,
    title: &'static str,
    coords_label: &'static str,
    latitude: f64,
    longitude: f64,
    description: &'static str,
    fact: Option<&'static str>,
}

impl Place {
    #[must_use]
    pub const fn new(
        id: &'static str,
        title: &'static str,
        coords_label: &'static str,
        latitude: f64,
        longitude: f64,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            coords_label,
            latitude,
            longitude,
            description,
            fact: None,
        }
    }

    #[must_use]
    pub const fn with_fact(mut self, fact: &'static str) -> Self {
        self.fact = Some(fact);
        self
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn coords_label(&self) -> &'static str {
        self.coords_label
    }

    /// Marker position for the map.
    #[must_use]
    pub fn marker(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Position derived from the coordinate label, as shown on the detail screen.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::parse_label(self.coords_label)
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The curated fact, or a shortened description when none exists.
    #[must_use]
    pub fn fact(&self) -> String {
        match self.fact {
            Some(fact) => fact.to_string(),
            None => fact_fallback(self.description),
        }
    }
}

fn fact_fallback(description: &str) -> String {
    let collapsed = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return GENERIC_FACT.to_string();
    }
    if collapsed.chars().count() > FACT_FALLBACK_CHARS {
        let cut: String = collapsed.chars().take(FACT_FALLBACK_CHARS).collect();
        format!("{cut}…")
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_north_east_label() {
        let c = Coordinates::parse_label("47.5859° N, 7.5890° E");
        assert!((c.latitude - 47.5859).abs() < 1e-9);
        assert!((c.longitude - 7.589).abs() < 1e-9);
    }

    #[test]
    fn southern_and_western_hemispheres_flip_sign() {
        let c = Coordinates::parse_label("33.9° S, 18.4° W");
        assert!((c.latitude + 33.9).abs() < 1e-9);
        assert!((c.longitude + 18.4).abs() < 1e-9);
    }

    #[test]
    fn label_without_comma_is_city_centre() {
        assert_eq!(Coordinates::parse_label("somewhere"), BASEL_CENTER);
    }

    #[test]
    fn unparsable_component_falls_back_per_axis() {
        let c = Coordinates::parse_label("north, 7.6 E");
        assert!((c.latitude - BASEL_CENTER.latitude).abs() < 1e-9);
        assert!((c.longitude - 7.6).abs() < 1e-9);
    }

    #[test]
    fn fact_prefers_curated_text() {
        let place = Place::new("x", "X", "1° N, 1° E", 1.0, 1.0, "desc").with_fact("fact");
        assert_eq!(place.fact(), "fact");
    }

    #[test]
    fn fact_fallback_truncates_long_descriptions() {
        let long: &'static str = Box::leak("word ".repeat(100).into_boxed_str());
        let place = Place::new("x", "X", "", 0.0, 0.0, long);
        let fact = place.fact();
        assert!(fact.ends_with('…'));
        assert_eq!(fact.chars().count(), FACT_FALLBACK_CHARS + 1);
    }

    #[test]
    fn fact_fallback_for_empty_description() {
        let place = Place::new("x", "X", "", 0.0, 0.0, "   ");
        assert_eq!(place.fact(), GENERIC_FACT);
    }
}

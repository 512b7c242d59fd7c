use crate::domain::model::OrbitalBody;

/// Reference table: (key, name, orbital period in Earth days, card color).
const PLANETS: [(&str, &str, f64, &str); 8] = [
    ("mercury", "Mercury", 88.0, "#a8a29e"),
    ("venus", "Venus", 225.0, "#fbbf24"),
    ("earth", "Earth", 365.25, "#3b82f6"),
    ("mars", "Mars", 687.0, "#ef4444"),
    ("jupiter", "Jupiter", 4333.0, "#f97316"),
    ("saturn", "Saturn", 10759.0, "#eab308"),
    ("uranus", "Uranus", 30687.0, "#06b6d4"),
    ("neptune", "Neptune", 60190.0, "#6366f1"),
];

pub fn default_bodies() -> Vec<OrbitalBody> {
    PLANETS
        .iter()
        .map(|&(key, name, days, color)| OrbitalBody::new(key, name, days).with_color(color))
        .collect()
}

/// FACEIT skill levels as inclusive ELO bands.
pub const FACEIT_LEVELS: [(u8, i64, i64); 10] = [
    (1, 0, 500),
    (2, 501, 750),
    (3, 751, 900),
    (4, 901, 1050),
    (5, 1051, 1200),
    (6, 1201, 1350),
    (7, 1351, 1530),
    (8, 1531, 1750),
    (9, 1751, 1999),
    (10, 2000, i64::MAX),
];

/// Anything outside every band falls back to level 1.
#[must_use]
pub fn level_for_elo(elo: i64) -> u8 {
    FACEIT_LEVELS
        .iter()
        .find(|(_, min, max)| elo >= *min && elo <= *max)
        .map_or(1, |(level, _, _)| *level)
}

#[must_use]
pub fn level_image_path(level: u8) -> String {
    format!("static/images/levels/{level}.svg")
}

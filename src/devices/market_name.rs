/// Marketing names that show up run together in the source table, paired with
/// how they are actually sold.
pub const NAME_CORRECTIONS: &[(&str, &str)] = &[
  ("OnePlus2",      "OnePlus 2"),
  ("OnePlus3",      "OnePlus 3"),
  ("OnePlus3T",     "OnePlus 3T"),
  ("OnePlus5",      "OnePlus 5"),
  ("OnePlus5T",     "OnePlus 5T"),
  ("OnePlus6",      "OnePlus 6"),
  ("OnePlus6T",     "OnePlus 6T"),
  ("OnePlus7",      "OnePlus 7"),
  ("OnePlus7Pro",   "OnePlus 7 Pro"),
  ("OnePlus7T",     "OnePlus 7T"),
  ("OnePlus7TPro",  "OnePlus 7T Pro"),
  ("OnePlus8",      "OnePlus 8"),
  ("OnePlus8Pro",   "OnePlus 8 Pro"),
  ("OnePlus8T",     "OnePlus 8T"),
  ("OnePlusNord",   "OnePlus Nord")
];

/// Looks `name` up in `corrections` (exact, case-sensitive match).
/// Unknown names are returned unchanged.
pub fn normalize_market_name<'a>(name: &'a str, corrections: &[(&str, &'a str)]) -> &'a str {
  corrections
    .iter()
    .find(|(raw, _)| *raw == name)
    .map(|(_, corrected)| *corrected)
    .unwrap_or(name)
}

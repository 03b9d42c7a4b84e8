use pantry_core::entities::Unit;
use pantry_core::units::Units;

/// Look up a unit by name or abbreviation, listing the catalog on a miss.
pub fn unit_by_hint<'a>(units: &'a Units, hint: &str) -> anyhow::Result<&'a Unit> {
    units.find_by_hint(hint).ok_or_else(|| {
        let known = units.iter().map(Unit::label).collect::<Vec<_>>().join(", ");
        anyhow::anyhow!("unknown unit '{hint}' (known units: {known})")
    })
}

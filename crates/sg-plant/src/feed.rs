//! Feed assembly: dry gases, steam and humid air as molar vectors.

use crate::inputs::PlantFeedSpec;
use serde::Serialize;
use sg_core::constants::{KG_PER_TONNE, WATER_KG_PER_KGMOL};
use sg_species::{ComponentVector, HumidAir, Species, humidify};

/// Steam mass flow [t/hr] → kgmol/hr H2O.
pub fn steam_kgmol(steam_t_per_hr: f64) -> f64 {
    steam_t_per_hr * KG_PER_TONNE / WATER_KG_PER_KGMOL
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssembledFeed {
    pub process_gas: ComponentVector,
    pub recycle_gas: ComponentVector,
    pub steam: ComponentVector,
    /// Dry air plus its water.
    pub air: ComponentVector,
    pub humid_air: HumidAir,
    /// Process gas + recycle gas + steam.
    pub primary_inlet: ComponentVector,
}

pub fn assemble_feed(spec: &PlantFeedSpec) -> AssembledFeed {
    let process_gas = spec.process_gas.composition.to_moles(spec.process_gas.flow_nm3_per_hr);
    let recycle_gas = spec.recycle_gas.composition.to_moles(spec.recycle_gas.flow_nm3_per_hr);
    let steam = ComponentVector::zero().with(Species::H2O, steam_kgmol(spec.steam_t_per_hr));

    let dry_air = spec.air.composition.to_moles(spec.air.flow_nm3_per_hr);
    let (air, humid_air) = humidify(
        &dry_air,
        spec.air.relative_humidity_pct,
        spec.air.ambient_temp_c,
    );

    AssembledFeed {
        process_gas,
        recycle_gas,
        steam,
        air,
        humid_air,
        primary_inlet: process_gas + recycle_gas + steam,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::PlantInputs;
    use sg_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn steam_conversion() {
        assert!(nearly_equal(steam_kgmol(18.0), 1000.0, Tolerances::default()));
        assert!(nearly_equal(
            steam_kgmol(250.0),
            250_000.0 / 18.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn default_feed_assembles() {
        let inputs = PlantInputs::default();
        let feed = assemble_feed(&inputs.feed);
        let tol = Tolerances::default();

        assert!(nearly_equal(
            feed.process_gas[Species::CH4],
            0.95 * 100_000.0 / 22.414,
            tol
        ));
        assert!(nearly_equal(
            feed.recycle_gas[Species::H2],
            0.75 * 5_000.0 / 22.414,
            tol
        ));
        assert_eq!(feed.primary_inlet[Species::O2], 0.0);
        assert!(nearly_equal(
            feed.primary_inlet[Species::H2O],
            steam_kgmol(250.0),
            tol
        ));
        assert!(nearly_equal(
            feed.primary_inlet[Species::N2],
            0.25 * 5_000.0 / 22.414,
            tol
        ));

        // Air water comes only from humidity.
        assert!(feed.humid_air.water_moles > 0.0);
        assert_eq!(feed.air[Species::H2O], feed.humid_air.water_moles);
        assert!(nearly_equal(
            feed.air[Species::O2],
            0.2092 * 15_000.0 / 22.414,
            tol
        ));
    }
}

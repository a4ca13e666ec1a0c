//! The embedded geologic time table.
//!
//! Simplified after the international chronostratigraphic chart. Colors are the
//! chart's conventional hex values.

use crate::domain::{Rank, TimeDivision};

/// Literal row of the source table.
#[derive(Debug, Clone, Copy)]
pub struct DivisionSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub rank: Rank,
    pub start_mya: f64,
    pub end_mya: f64,
    pub parent_id: Option<&'static str>,
    pub color: Option<&'static str>,
}

impl DivisionSpec {
    pub fn to_division(&self) -> TimeDivision {
        TimeDivision {
            id: self.id.to_string(),
            name: self.name.to_string(),
            rank: self.rank,
            start_mya: self.start_mya,
            end_mya: self.end_mya,
            parent_id: self.parent_id.map(str::to_string),
            color: self.color.map(str::to_string),
        }
    }
}

const fn row(
    id: &'static str,
    name: &'static str,
    rank: Rank,
    start_mya: f64,
    end_mya: f64,
    parent_id: Option<&'static str>,
    color: Option<&'static str>,
) -> DivisionSpec {
    DivisionSpec {
        id,
        name,
        rank,
        start_mya,
        end_mya,
        parent_id,
        color,
    }
}

use crate::domain::Rank::{Eon, Epoch, Era, Period};

pub const GEOLOGIC_TIME_TABLE: &[DivisionSpec] = &[
    // eons
    row("hadean", "Hadean", Eon, 4600.0, 4000.0, None, Some("#AE027E")),
    row("archaean", "Archaean", Eon, 4000.0, 2500.0, None, Some("#F0047F")),
    row("proterozoic", "Proterozoic", Eon, 2500.0, 541.0, None, Some("#F73563")),
    row("phanerozoic", "Phanerozoic", Eon, 541.0, 0.0, None, Some("#9AD9DD")),
    // eras
    row("paleozoic", "Paleozoic", Era, 541.0, 251.9, Some("phanerozoic"), Some("#99C08D")),
    row("mesozoic", "Mesozoic", Era, 251.9, 66.0, Some("phanerozoic"), Some("#67C5CA")),
    row("cenozoic", "Cenozoic", Era, 66.0, 0.0, Some("phanerozoic"), Some("#F2F91D")),
    // paleozoic periods
    row("cambrian", "Cambrian", Period, 541.0, 485.4, Some("paleozoic"), Some("#7FA056")),
    row("ordovician", "Ordovician", Period, 485.4, 443.8, Some("paleozoic"), Some("#009270")),
    row("silurian", "Silurian", Period, 443.8, 419.2, Some("paleozoic"), Some("#B3E1B6")),
    row("devonian", "Devonian", Period, 419.2, 358.9, Some("paleozoic"), Some("#CB8C37")),
    row("carboniferous", "Carboniferous", Period, 358.9, 298.9, Some("paleozoic"), Some("#67A599")),
    row("permian", "Permian", Period, 298.9, 251.9, Some("paleozoic"), Some("#F04028")),
    // mesozoic periods
    row("triassic", "Triassic", Period, 251.9, 201.3, Some("mesozoic"), Some("#812B92")),
    row("jurassic", "Jurassic", Period, 201.3, 145.0, Some("mesozoic"), Some("#34B2C9")),
    row("cretaceous", "Cretaceous", Period, 145.0, 66.0, Some("mesozoic"), Some("#7FC64E")),
    // cenozoic periods
    row("paleogene", "Paleogene", Period, 66.0, 23.03, Some("cenozoic"), Some("#FD9A52")),
    row("neogene", "Neogene", Period, 23.03, 2.58, Some("cenozoic"), Some("#FFE619")),
    row("quaternary", "Quaternary", Period, 2.58, 0.0, Some("cenozoic"), Some("#F9F97F")),
    // paleogene epochs
    row("paleocene", "Paleocene", Epoch, 66.0, 56.0, Some("paleogene"), Some("#FDA75F")),
    row("eocene", "Eocene", Epoch, 56.0, 33.9, Some("paleogene"), Some("#FDB46C")),
    row("oligocene", "Oligocene", Epoch, 33.9, 23.03, Some("paleogene"), Some("#FDC07A")),
    // neogene epochs
    row("miocene", "Miocene", Epoch, 23.03, 5.333, Some("neogene"), Some("#FFFF00")),
    row("pliocene", "Pliocene", Epoch, 5.333, 2.58, Some("neogene"), Some("#FFFF99")),
    // quaternary epochs
    row("pleistocene", "Pleistocene", Epoch, 2.58, 0.0117, Some("quaternary"), Some("#FFF2AE")),
    row("holocene", "Holocene", Epoch, 0.0117, 0.0, Some("quaternary"), Some("#FEF2E0")),
    // hypothetical next epoch, the next 100,000 years
    row("schmolocene", "Schmolocene", Epoch, 0.0, -0.1, Some("quaternary"), None),
];

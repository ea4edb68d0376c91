//! Pipeline orchestrator.
//!
//! One call evaluates the whole train from scratch:
//! feed → primary → secondary → HTS → LTS → methanator → ammonia reactor.
//! Anchored stages consume their override instead of the upstream outlet;
//! the upstream stage's own outlet is left as computed.

use crate::feed::{AssembledFeed, assemble_feed};
use crate::inputs::{PlantInputs, SeparationSpec};
use crate::kpi::Kpis;
use crate::overrides::Anchor;
use serde::Serialize;
use sg_species::{ComponentVector, Species, Stream};
use sg_stages::{
    Absorber, AmmoniaReactor, Combustion, Condensate, Methanator, PrimaryReformer,
    SecondaryReformer, ShiftConverter, Stage, StageId, Stripper,
};
use tracing::{debug, warn};

/// Inlet and outlet of one evaluated stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageStreams {
    pub stage: StageId,
    pub inlet: Stream,
    pub outlet: Stream,
    /// True when `inlet` came from an override anchor.
    pub overridden: bool,
}

/// Side branch on the LTS outlet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparationStreams {
    pub condensate_outlet: Stream,
    pub absorber_top: Stream,
    pub absorber_bottom: Stream,
    pub stripper_outlet: Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NegativeFlow {
    pub stage: StageId,
    pub species: Species,
    pub value: f64,
}

/// Bookkeeping reported alongside the results; never feeds back into them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub combustion: Combustion,
    pub negative_flows: Vec<NegativeFlow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantOutputs {
    pub feed: AssembledFeed,
    /// One entry per stage, in `StageId::ALL` order.
    pub stages: Vec<StageStreams>,
    pub separation: Option<SeparationStreams>,
    pub kpis: Kpis,
    pub diagnostics: Diagnostics,
}

impl PlantOutputs {
    pub fn stage(&self, id: StageId) -> &StageStreams {
        &self.stages[id.index()]
    }

    /// Inlet the anchored stage would see without its override.
    pub fn derived_inlet(&self, anchor: Anchor) -> &ComponentVector {
        self.stage(anchor.upstream()).outlet.moles()
    }
}

#[derive(Default)]
struct Trace {
    stages: Vec<StageStreams>,
    negative_flows: Vec<NegativeFlow>,
}

impl Trace {
    fn push(
        &mut self,
        stage: StageId,
        inlet: ComponentVector,
        outlet: ComponentVector,
        overridden: bool,
    ) {
        debug!(
            stage = stage.key(),
            overridden,
            inlet_kgmol = inlet.total(),
            outlet_kgmol = outlet.total(),
            "stage evaluated"
        );
        for species in outlet.negative_species() {
            let value = outlet[species];
            warn!(
                stage = stage.key(),
                species = species.key(),
                value,
                "negative outlet flow"
            );
            self.negative_flows.push(NegativeFlow {
                stage,
                species,
                value,
            });
        }
        self.stages.push(StageStreams {
            stage,
            inlet: Stream::from_vector(inlet),
            outlet: Stream::from_vector(outlet),
            overridden,
        });
    }

    /// Run `stage` on `anchor` when present, else on `derived`.
    fn run(
        &mut self,
        stage: &dyn Stage,
        derived: ComponentVector,
        anchor: Option<ComponentVector>,
    ) -> ComponentVector {
        let inlet = anchor.unwrap_or(derived);
        let outlet = stage.outlet(&inlet);
        self.push(stage.id(), inlet, outlet, anchor.is_some());
        outlet
    }
}

fn evaluate_separation(
    spec: &SeparationSpec,
    lts_outlet: &ComponentVector,
) -> SeparationStreams {
    let condensed = Condensate::new(spec.condensate_h2o_removal).outlet(lts_outlet);
    let products = Absorber::new(spec.absorber_target_dry_co2_pct).separate(&condensed);
    let stripped = Stripper.outlet(&products.bottom);
    SeparationStreams {
        condensate_outlet: Stream::from_vector(condensed),
        absorber_top: Stream::from_vector(products.top),
        absorber_bottom: Stream::from_vector(products.bottom),
        stripper_outlet: Stream::from_vector(stripped),
    }
}

/// Evaluate the whole plant for one input snapshot.
pub fn evaluate_pipeline(inputs: &PlantInputs) -> PlantOutputs {
    let feed = assemble_feed(&inputs.feed);
    let c = &inputs.conversions;
    let mut trace = Trace::default();

    let primary = PrimaryReformer::new(c.primary.ch4, c.primary.c2h6, c.primary.co);
    let primary_out = trace.run(&primary, feed.primary_inlet, None);

    let secondary =
        SecondaryReformer::new(feed.air, c.secondary.ch4, c.secondary.co, c.secondary.o2);
    let (secondary_out, combustion) = secondary.react(&primary_out);
    if combustion.h2_limited {
        debug!(
            required_h2 = combustion.required_h2,
            available_h2 = combustion.available_h2,
            "secondary reformer combustion limited by hydrogen"
        );
    }
    trace.push(StageId::SecondaryReformer, primary_out, secondary_out, false);

    let hts_out = trace.run(&ShiftConverter::hts(c.hts_co), secondary_out, None);
    let lts_out = trace.run(&ShiftConverter::lts(c.lts_co), hts_out, None);

    let methanator = Methanator::new(c.methanator.co, c.methanator.co2);
    let methanator_out = trace.run(&methanator, lts_out, inputs.overrides.methanator);

    let converter = AmmoniaReactor::new(c.ammonia_n2);
    let ammonia_in = inputs.overrides.ammonia_reactor.unwrap_or(methanator_out);
    let ammonia_out = trace.run(&converter, methanator_out, inputs.overrides.ammonia_reactor);

    let separation = inputs
        .separation
        .as_ref()
        .map(|spec| evaluate_separation(spec, &lts_out));

    let kpis = Kpis::compute(inputs, &feed, &ammonia_in, &ammonia_out);

    PlantOutputs {
        feed,
        stages: trace.stages,
        separation,
        kpis,
        diagnostics: Diagnostics {
            combustion,
            negative_flows: trace.negative_flows,
        },
    }
}

//! Interactive plant session: current inputs plus their evaluated outputs.
//!
//! Every mutator replaces part of the inputs and re-runs the whole pipeline,
//! so `outputs()` always matches `inputs()`.

use crate::cache::EvaluationCache;
use crate::inputs::{
    ConversionParameters, DesignBasis, OperatingConditions, PlantFeedSpec, PlantInputs,
    SeparationSpec,
};
use crate::overrides::{Anchor, OverrideEdit};
use crate::pipeline::{PlantOutputs, evaluate_pipeline};
use sg_species::{ComponentVector, Species};

#[derive(Debug)]
pub struct PlantSession {
    inputs: PlantInputs,
    outputs: PlantOutputs,
    cache: Option<EvaluationCache>,
}

impl PlantSession {
    pub fn new(inputs: PlantInputs) -> Self {
        let outputs = evaluate_pipeline(&inputs);
        Self {
            inputs,
            outputs,
            cache: None,
        }
    }

    /// Session that memoizes evaluations by input digest.
    pub fn with_cache(inputs: PlantInputs) -> Self {
        let mut cache = EvaluationCache::new();
        let outputs = cache.evaluate(&inputs);
        Self {
            inputs,
            outputs,
            cache: Some(cache),
        }
    }

    pub fn inputs(&self) -> &PlantInputs {
        &self.inputs
    }

    pub fn outputs(&self) -> &PlantOutputs {
        &self.outputs
    }

    pub fn cache(&self) -> Option<&EvaluationCache> {
        self.cache.as_ref()
    }

    fn recompute(&mut self) -> &PlantOutputs {
        self.outputs = match self.cache.as_mut() {
            Some(cache) => cache.evaluate(&self.inputs),
            None => evaluate_pipeline(&self.inputs),
        };
        &self.outputs
    }

    pub fn replace_inputs(&mut self, inputs: PlantInputs) -> &PlantOutputs {
        self.inputs = inputs;
        self.recompute()
    }

    pub fn set_feed(&mut self, feed: PlantFeedSpec) -> &PlantOutputs {
        self.inputs.feed = feed;
        self.recompute()
    }

    pub fn set_design(&mut self, design: DesignBasis) -> &PlantOutputs {
        self.inputs.design = design;
        self.recompute()
    }

    pub fn set_conversions(&mut self, conversions: ConversionParameters) -> &PlantOutputs {
        self.inputs.conversions = conversions;
        self.recompute()
    }

    /// Conditions are metadata, but KPIs report their deltas.
    pub fn set_conditions(&mut self, conditions: OperatingConditions) -> &PlantOutputs {
        self.inputs.conditions = conditions;
        self.recompute()
    }

    pub fn set_separation(&mut self, separation: Option<SeparationSpec>) -> &PlantOutputs {
        self.inputs.separation = separation;
        self.recompute()
    }

    /// Edit one species at an anchor. The first edit copies the stage's
    /// currently derived inlet; later edits patch the stored anchor.
    pub fn edit_override(
        &mut self,
        anchor: Anchor,
        species: Species,
        edit: OverrideEdit,
    ) -> &PlantOutputs {
        let derived = *self.outputs.derived_inlet(anchor);
        self.inputs.overrides.edit(anchor, &derived, species, edit);
        self.recompute()
    }

    /// Replace an anchor with a complete vector.
    pub fn set_override(&mut self, anchor: Anchor, vector: ComponentVector) -> &PlantOutputs {
        self.inputs.overrides.set(anchor, vector);
        self.recompute()
    }

    pub fn clear_override(&mut self, anchor: Anchor) -> &PlantOutputs {
        self.inputs.overrides.clear(anchor);
        self.recompute()
    }
}

impl Default for PlantSession {
    fn default() -> Self {
        Self::new(PlantInputs::default())
    }
}

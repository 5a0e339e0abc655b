// WASM bindings for the impact engine, for browser-embedded consumers
use wasm_bindgen::prelude::*;

use crate::impact_api::{
    calculate_impact_with_context, ImpactParameters, PopulationContext, TerrainOverride,
};

#[wasm_bindgen]
pub struct WasmImpactEngine;

#[wasm_bindgen]
impl WasmImpactEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        WasmImpactEngine
    }

    /// Run the full impact pipeline. Parameters arrive as a JSON object
    /// with the `ImpactParameters` field names; the result is the
    /// serialized `ComprehensiveImpactResults`.
    #[wasm_bindgen(js_name = calculateImpact)]
    pub fn calculate_impact(&self, params_json: &str) -> Result<String, JsValue> {
        self.calculate_impact_with_context(params_json, None, None)
    }

    /// Same as `calculateImpact`, with optional JSON-encoded population
    /// and terrain-override objects from the host's data providers.
    #[wasm_bindgen(js_name = calculateImpactWithContext)]
    pub fn calculate_impact_with_context(
        &self,
        params_json: &str,
        population_json: Option<String>,
        terrain_json: Option<String>,
    ) -> Result<String, JsValue> {
        let params: ImpactParameters = serde_json::from_str(params_json)
            .map_err(|e| JsValue::from_str(&format!("invalid parameters: {e}")))?;

        let population: Option<PopulationContext> = population_json
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(|e| JsValue::from_str(&format!("invalid population context: {e}")))?;

        let terrain: Option<TerrainOverride> = terrain_json
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(|e| JsValue::from_str(&format!("invalid terrain override: {e}")))?;

        let results =
            calculate_impact_with_context(&params, population.as_ref(), terrain.as_ref())
                .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&results)
            .map_err(|e| JsValue::from_str(&format!("serialization failed: {e}")))
    }
}

impl Default for WasmImpactEngine {
    fn default() -> Self {
        Self::new()
    }
}

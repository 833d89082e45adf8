//! JSON Schema for agent update payloads.
//!
//! The schema is what API documentation renders for the update endpoint:
//! field descriptions come from the doc comments on the payload types and
//! every scalar field carries its documented example value.

use schemars::schema::RootSchema;
use serde_json::{json, Map, Value};

use crate::agents::domain::{samples, AgentUpdatePayload, ContextProviderRef, FunctionBinding};

/// Schema of [`AgentUpdatePayload`], nested types under `definitions`
pub fn update_payload_schema() -> RootSchema {
    schemars::schema_for!(AgentUpdatePayload)
}

pub fn update_payload_schema_json() -> serde_json::Result<Value> {
    serde_json::to_value(update_payload_schema())
}

/// A fully populated payload made of the documented example values
pub fn example_payload() -> AgentUpdatePayload {
    let mut provider = Map::new();
    provider.insert("url".to_string(), json!("http://127.0.0.1:8080/context"));
    provider.insert("headers".to_string(), json!({ "Authorization": "Bearer <token>" }));

    AgentUpdatePayload {
        agent_code: Some(samples::agent_code().to_string()),
        agent_name: Some(samples::agent_name().to_string()),
        asr_model_id: Some(samples::asr_model_id().to_string()),
        vad_model_id: Some(samples::vad_model_id().to_string()),
        llm_model_id: Some(samples::llm_model_id().to_string()),
        vllm_model_id: Some(samples::vllm_model_id().to_string()),
        tts_model_id: Some(samples::tts_model_id().to_string()),
        tts_voice_id: Some(samples::tts_voice_id().to_string()),
        mem_model_id: Some(samples::mem_model_id().to_string()),
        intent_model_id: Some(samples::intent_model_id().to_string()),
        functions: Some(vec![
            FunctionBinding::new(samples::plugin_id()).with_param("city", "Beijing")
        ]),
        system_prompt: Some(samples::system_prompt().to_string()),
        summary_memory: Some(samples::summary_memory().to_string()),
        chat_history_conf: Some(samples::chat_history_conf()),
        lang_code: Some(samples::lang_code().to_string()),
        language: Some(samples::language().to_string()),
        sort: Some(samples::sort()),
        context_providers: Some(vec![ContextProviderRef::from(provider)]),
    }
}

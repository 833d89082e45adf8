//! Partial update payload for an agent

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::ChatHistoryConf;
use crate::agents::validator::ValidationError;

/// Agent update payload
///
/// Every field is optional. A field that is absent (or `null`) means
/// "leave unchanged"; only the fields present in the request are applied by
/// the update handler. The agent being updated is identified outside of the
/// payload (request path).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentUpdatePayload {
    /// Agent code
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::agent_code")]
    pub agent_code: Option<String>,

    /// Agent name
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::agent_name")]
    pub agent_name: Option<String>,

    /// Speech recognition model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::asr_model_id")]
    pub asr_model_id: Option<String>,

    /// Voice activity detection model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::vad_model_id")]
    pub vad_model_id: Option<String>,

    /// Large language model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::llm_model_id")]
    pub llm_model_id: Option<String>,

    /// Vision language model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::vllm_model_id")]
    pub vllm_model_id: Option<String>,

    /// Speech synthesis model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::tts_model_id")]
    pub tts_model_id: Option<String>,

    /// Voice identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::tts_voice_id")]
    pub tts_voice_id: Option<String>,

    /// Memory model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::mem_model_id")]
    pub mem_model_id: Option<String>,

    /// Intent model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::intent_model_id")]
    pub intent_model_id: Option<String>,

    /// Plugin functions bound to the agent, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionBinding>>,

    /// Role prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::system_prompt")]
    pub system_prompt: Option<String>,

    /// Summary memory
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::summary_memory")]
    pub summary_memory: Option<String>,

    /// Chat history setting (0 = nothing, 1 = text only, 2 = text and voice)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::chat_history_conf")]
    #[schemars(range(min = 0, max = 2))]
    pub chat_history_conf: Option<i32>,

    /// Locale code
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::lang_code")]
    pub lang_code: Option<String>,

    /// Interaction language
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::language")]
    pub language: Option<String>,

    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(example = "samples::sort")]
    pub sort: Option<i32>,

    /// Context provider configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_providers: Option<Vec<ContextProviderRef>>,
}

impl AgentUpdatePayload {
    /// Wire names of every payload field, in declaration order
    pub const FIELDS: &'static [&'static str] = &[
        "agentCode",
        "agentName",
        "asrModelId",
        "vadModelId",
        "llmModelId",
        "vllmModelId",
        "ttsModelId",
        "ttsVoiceId",
        "memModelId",
        "intentModelId",
        "functions",
        "systemPrompt",
        "summaryMemory",
        "chatHistoryConf",
        "langCode",
        "language",
        "sort",
        "contextProviders",
    ];

    /// Wire names of the fields this payload sets, in declaration order
    pub fn present_fields(&self) -> Vec<&'static str> {
        let set = [
            self.agent_code.is_some(),
            self.agent_name.is_some(),
            self.asr_model_id.is_some(),
            self.vad_model_id.is_some(),
            self.llm_model_id.is_some(),
            self.vllm_model_id.is_some(),
            self.tts_model_id.is_some(),
            self.tts_voice_id.is_some(),
            self.mem_model_id.is_some(),
            self.intent_model_id.is_some(),
            self.functions.is_some(),
            self.system_prompt.is_some(),
            self.summary_memory.is_some(),
            self.chat_history_conf.is_some(),
            self.lang_code.is_some(),
            self.language.is_some(),
            self.sort.is_some(),
            self.context_providers.is_some(),
        ];

        Self::FIELDS
            .iter()
            .zip(set)
            .filter_map(|(name, present)| present.then_some(*name))
            .collect()
    }

    /// True when no field is set, i.e. the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Typed chat history setting, if one was supplied.
    ///
    /// Returns an error for integers outside the known settings.
    pub fn chat_history(&self) -> Result<Option<ChatHistoryConf>, ValidationError> {
        self.chat_history_conf
            .map(ChatHistoryConf::try_from)
            .transpose()
    }
}

/// Plugin function information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionBinding {
    /// Plugin ID
    #[schemars(example = "samples::plugin_id")]
    pub plugin_id: String,

    /// Function parameters. `{}` and an absent map are distinct: the first
    /// clears the parameters, the second leaves them alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_info: Option<HashMap<String, Value>>,
}

impl FunctionBinding {
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            param_info: None,
        }
    }

    /// Add (or overwrite) a single parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.param_info
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a parameter value
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.param_info.as_ref().and_then(|params| params.get(key))
    }
}

/// Context provider configuration, carried verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ContextProviderRef(pub Map<String, Value>);

impl ContextProviderRef {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for ContextProviderRef {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Documented example values for the API schema
pub(crate) mod samples {
    pub fn agent_code() -> &'static str {
        "AGT_1234567890"
    }

    pub fn agent_name() -> &'static str {
        "客服助手"
    }

    pub fn asr_model_id() -> &'static str {
        "asr_model_02"
    }

    pub fn vad_model_id() -> &'static str {
        "vad_model_02"
    }

    pub fn llm_model_id() -> &'static str {
        "llm_model_02"
    }

    pub fn vllm_model_id() -> &'static str {
        "vllm_model_02"
    }

    pub fn tts_model_id() -> &'static str {
        "tts_model_02"
    }

    pub fn tts_voice_id() -> &'static str {
        "voice_02"
    }

    pub fn mem_model_id() -> &'static str {
        "mem_model_02"
    }

    pub fn intent_model_id() -> &'static str {
        "intent_model_02"
    }

    pub fn system_prompt() -> &'static str {
        "你是一个专业的客服助手，负责回答用户问题并提供帮助"
    }

    pub fn summary_memory() -> &'static str {
        "构建可生长的动态记忆网络，在有限空间内保留关键信息的同时，智能维护信息演变轨迹\n\
         根据对话记录，总结user的重要信息，以便在未来的对话中提供更个性化的服务"
    }

    pub fn chat_history_conf() -> i32 {
        1
    }

    pub fn lang_code() -> &'static str {
        "zh_CN"
    }

    pub fn language() -> &'static str {
        "中文"
    }

    pub fn sort() -> i32 {
        1
    }

    pub fn plugin_id() -> &'static str {
        "plugin_01"
    }
}

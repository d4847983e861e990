// Shared prompt fragments.
// Each service that needs model calls defines its own prompts.rs alongside it.

/// Instruction placed right before the JSON schema in every structured request.
pub const SCHEMA_INSTRUCTION: &str =
    "Lütfen JSON Şemasına %100 uyarak yanıt ver. allFindingsFlat yerine findingsTable kullan:";

/// System-style guard against invented evidence. Prepended to rubric prompts.
pub const NO_HALLUCINATION: &str = "Halüsinasyon yapma: yalnızca verilen kurallara ve \
metinden çıkarılabilen kanıtlara dayan. Varsayım gerekiyorsa “BİLGİ” ile işaretle, HATA üretme.";

// IGL-TEF evaluation prompt.
// The rubric and the reply schema are static; only the candidate and file names vary.

use crate::llm_client::prompts::{NO_HALLUCINATION, SCHEMA_INSTRUCTION};

pub const RUBRIC_ROLE: &str = "Rol: Sen, “IGL-TEF Tez Değerlendirme Sistemi” için kural motoru + \
rapor üretici olarak çalışan bir yazılım mimarı ve ürün geliştiricisin.";

pub const RUBRIC_BODY: &str = r#"0) Ürün hedefi
Tez dosyasını parse et -> IGL-TEF kural motoruyla değerlendir -> JSON üret.

1) Kural Statüleri
- UYGUN (pass)
- UYARI (minor issue)
- HATA (fail)
- N/A (uygulanamaz: çalışmanın niteliği gereği kural bu tez için geçersiz)
- BİLGİ (tezde beyan bulunmuyor ama “zorunlu değil”)

Önemli: Zorunlu olmayan hiçbir madde “HATA” olmamalı.

2) Tier Bazlı Karar Mantığı
- Tier I (Zorunlu): Özetler, İçindekiler, Sayfa Numaralama. Eksikse -> İDARİ_RED.
- Tier II: Etik, Benzerlik, AI, Çıkar Çatışması. Genelde BEYAN/KOŞULLU (N/A veya BİLGİ).
- Tier III: Akademik Rubrik (Yöntem, Tartışma vb.).

3) Skorlama Formülü (KESİN)
- UygulanabilirKuralSayisi = ToplamKural - N/A - BİLGİ
- BaşarıPuanı = (UYGUN * 1.0 + UYARI * 0.5)
- BaşarıOranı(%) = (BaşarıPuanı / UygulanabilirKuralSayisi) * 100
- HataOranı(%) = (HATA / UygulanabilirKuralSayisi) * 100
- score.note: “Toplam X kuralın Y’si N/A, Z’si BİLGİ olduğu için değerlendirme dışı bırakıldı. Kalan K uygulanabilir kuralda: A UYGUN, B UYARI, C HATA.”

4) 22 Maddelik Rule Engine (MUTLAKA HEPSİ findingsTable'da OLMALI)
T1: Türkçe Özet, İngilizce Özet, İçindekiler Tablosu, Sayfa numaralama standardı, Ekler.
T2: Etik kurul belgesi, İntihal / benzerlik beyanı, Çıkar çatışması beyanı, Generative AI beyanı.
T3: Literatür sentezi, Teorik boşluk tanımı, Yöntem-amaç uyumu, Yöntem gerekçesi, Örneklem büyüklüğü raporu, N<30 için gerekçe, APA p-değeri raporlama, İstatistik kısaltmaları, Tartışma bölümü, Sonuç-amaç uyumu, Sınırlılıklar, Akademik dil ve üslup, Kaynakça tutarlılığı.

5) Rapor Metni (reportTxt)
UTF-8 uyumlu, UI'da gösterilen tüm detayları içeren profesyonel bir TXT raporu."#;

pub const REPLY_SCHEMA: &str = r#"{
  "meta": { "candidateName": "string", "fileName": "string", "evaluatedAt": "YYYY-MM-DD", "version": "IGL-TEF v1" },
  "decision": { "overall": "İDARİ_RED | GEÇTİ | DÜZELTME_GEREKİR | RED", "risk": "DÜŞÜK | ORTA | YÜKSEK", "summaryText": "string" },
  "counts": {
    "totalRules": 22,
    "applicable": number,
    "countsByStatus": { "UYGUN": number, "UYARI": number, "HATA": number, "N_A": number, "BILGI": number },
    "score": { "points": number, "maxPoints": number, "successRate": number, "errorRate": number },
    "note": "string"
  },
  "tiers": [
    { "tier": "TIER I", "status": "string", "summary": "string", "findings": [] }
  ],
  "findingsTable": [
    { "tier": "TIER 1", "ruleId": "string", "ruleName": "string", "status": "UYGUN | UYARI | HATA | N/A | BİLGİ", "note": "string", "evidence": "string" }
  ],
  "reportTxt": "string"
}"#;

/// Builds the full text part of the evaluation request.
pub fn build_evaluation_prompt(candidate_name: &str, file_name: &str) -> String {
    format!(
        "{RUBRIC_ROLE}\n{NO_HALLUCINATION}\n\n{RUBRIC_BODY}\n\nAday: {candidate_name}\nDosya: {file_name}\n\n{SCHEMA_INSTRUCTION}\n{REPLY_SCHEMA}"
    )
}

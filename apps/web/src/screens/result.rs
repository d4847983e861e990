//! Result screen: verdict, score cards, filterable findings table.

use std::fmt::Write as _;

use crate::evaluation::filter::StatusFilter;
use crate::evaluation::models::{EvaluationResult, FindingStatus, RiskLevel, TOTAL_RULES};
use crate::screens::layout::escape;

pub const EMPTY_FILTER_MESSAGE: &str =
    "Bu filtreye uygun herhangi bir bulgu bulunmamaktadır.";

pub struct ResultView<'a> {
    pub result: &'a EvaluationResult,
    pub filter: StatusFilter,
    /// Base path of the session, e.g. `/evaluations/{id}`.
    pub base_path: &'a str,
}

fn status_badge(status: FindingStatus) -> &'static str {
    match status {
        FindingStatus::Uygun => r#"<span class="badge badge-uygun">Uygun</span>"#,
        FindingStatus::Uyari => r#"<span class="badge badge-uyari">Uyarı</span>"#,
        FindingStatus::Hata => r#"<span class="badge badge-hata">Hata</span>"#,
        FindingStatus::NotApplicable => r#"<span class="badge badge-na">N/A</span>"#,
        FindingStatus::Bilgi => r#"<span class="badge badge-bilgi">Bilgi</span>"#,
    }
}

fn risk_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "badge-uygun",
        RiskLevel::Medium => "badge-uyari",
        RiskLevel::High => "badge-hata",
    }
}

/// Minimal query-value encoding for the filter links.
fn filter_query(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "ALL",
        StatusFilter::Only(FindingStatus::Hata) => "HATA",
        StatusFilter::Only(FindingStatus::Uyari) => "UYARI",
        StatusFilter::Only(FindingStatus::Uygun) => "UYGUN",
        StatusFilter::Only(FindingStatus::NotApplicable) => "N%2FA",
        StatusFilter::Only(FindingStatus::Bilgi) => "B%C4%B0LG%C4%B0",
    }
}

fn render_filters(view: &ResultView<'_>) -> String {
    let mut out = String::from(r#"<nav class="filters">"#);
    for bucket in StatusFilter::BUCKETS {
        let class = if bucket == view.filter { " class=\"active\"" } else { "" };
        let _ = write!(
            out,
            r#"<a{class} href="{}?status={}">{}</a>"#,
            escape(view.base_path),
            filter_query(bucket),
            bucket.as_str()
        );
    }
    out.push_str("</nav>");
    out
}

fn render_findings(view: &ResultView<'_>) -> String {
    let shown = view.filter.apply(&view.result.findings_table);
    if shown.is_empty() {
        return format!(r#"<p class="empty">{EMPTY_FILTER_MESSAGE}</p>"#);
    }

    let mut rows = String::new();
    for finding in shown {
        let evidence = finding
            .evidence()
            .map(|e| format!("<p><em>Kanıt: {}</em></p>", escape(e)))
            .unwrap_or_default();
        let _ = write!(
            rows,
            r#"<tr data-status="{status}"><td><strong>{name}</strong><br><small>{tier} • {id}</small></td><td>{badge}</td><td><p>{note}</p>{evidence}</td></tr>"#,
            status = finding.status.as_str(),
            name = escape(&finding.rule_name),
            tier = escape(&finding.tier),
            id = escape(&finding.rule_id),
            badge = status_badge(finding.status),
            note = escape(&finding.note),
        );
    }

    format!(
        r#"<table><thead><tr><th>Kural ve Kategori</th><th>Durum</th><th>Değerlendirme Notu</th></tr></thead><tbody>{rows}</tbody></table>"#
    )
}

pub fn render(view: &ResultView<'_>) -> String {
    let EvaluationResult {
        meta,
        decision,
        counts,
        ..
    } = view.result;
    let score = &counts.score;
    let by_status = &counts.counts_by_status;

    let verdict_class = if decision.overall.is_rejection() {
        "red"
    } else {
        "green"
    };
    let note = if counts.note.trim().is_empty() {
        format!("{} uygulanabilir kural üzerinden hesaplandı.", counts.applicable)
    } else {
        escape(&counts.note)
    };
    let base = escape(view.base_path);

    format!(
        r#"<section class="card" data-screen="result">
  <h1>Değerlendirme Sonuçları</h1>
  <p class="meta"><span>{file}</span> · <span>{candidate}</span> · <span>{evaluated_at}</span> · <span>Framework: {version}</span></p>
  <div class="kpis">
    <div class="kpi">
      <h3>Genel Karar</h3>
      <span class="badge {risk_class}">{risk} RİSK</span>
      <div class="verdict {verdict_class}">{verdict}</div>
      <p>{summary}</p>
    </div>
    <div class="kpi">
      <h3>Başarı Oranı</h3>
      <div class="rate" id="success-rate">%{success}</div>
      <div class="bar"><div style="width: {success}%; background: #2563eb"></div></div>
      <p><em>{note}</em></p>
    </div>
    <div class="kpi">
      <h3>Hata Oranı</h3>
      <div class="rate red" id="error-rate">%{error}</div>
      <div class="bar"><div style="width: {error}%; background: #ef4444"></div></div>
      <p><small>HATA: {hata}</small> <small>N/A: {n_a}</small> <small>BİLGİ: {bilgi}</small></p>
    </div>
  </div>
  <h3>Bulgular Listesi ({total} Kural)</h3>
  {filters}
  {findings}
  <footer>
    <p>Hesaplama IGL-TEF v1 Standartlarına Uygundur</p>
    <form method="post" action="{base}/reset"><button type="submit">Yeniden Başlat</button></form>
    <a href="{base}/report" download>Dosyayı İndir (TXT)</a>
  </footer>
</section>"#,
        file = escape(&meta.file_name),
        candidate = escape(&meta.candidate_name),
        evaluated_at = escape(&meta.evaluated_at),
        version = escape(&meta.version),
        risk_class = risk_class(decision.risk),
        risk = decision.risk.as_str(),
        verdict = decision.overall.label(),
        summary = escape(&decision.summary_text),
        success = score.success_rate,
        error = score.error_rate,
        hata = by_status.hata,
        n_a = by_status.n_a,
        bilgi = by_status.bilgi,
        total = TOTAL_RULES,
        filters = render_filters(view),
        findings = render_findings(view),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::models::fixtures::sample_result;
    use crate::evaluation::models::Verdict;

    fn render_with(result: &EvaluationResult, filter: StatusFilter) -> String {
        render(&ResultView {
            result,
            filter,
            base_path: "/evaluations/abc",
        })
    }

    #[test]
    fn test_success_rate_rendered_verbatim() {
        let mut result = sample_result();
        result.counts.score.success_rate = 66.66666666666667;
        let html = render_with(&result, StatusFilter::All);
        assert!(html.contains("<div class=\"rate\" id=\"success-rate\">%66.66666666666667</div>"));
        assert!(html.contains("id=\"error-rate\">%5.56</div>"));
    }

    #[test]
    fn test_whole_rates_render_without_decimals() {
        let mut result = sample_result();
        result.counts.score.success_rate = 80.0;
        assert!(render_with(&result, StatusFilter::All).contains("id=\"success-rate\">%80</div>"));
    }

    #[test]
    fn test_hata_filter_renders_only_hata_rows() {
        let html = render_with(&sample_result(), StatusFilter::Only(FindingStatus::Hata));
        assert_eq!(html.matches("<tr data-status=").count(), 1);
        assert!(html.contains("<tr data-status=\"HATA\">"));
    }

    #[test]
    fn test_all_filter_renders_every_row() {
        let html = render_with(&sample_result(), StatusFilter::All);
        assert_eq!(html.matches("<tr data-status=").count(), 22);
    }

    #[test]
    fn test_empty_bucket_shows_message() {
        let mut result = sample_result();
        result.findings_table.retain(|f| f.status != FindingStatus::Bilgi);
        let html = render_with(&result, StatusFilter::Only(FindingStatus::Bilgi));
        assert!(html.contains(EMPTY_FILTER_MESSAGE));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_verdict_and_fallback_note() {
        let mut result = sample_result();
        result.decision.overall = Verdict::AdministrativeReject;
        result.counts.note.clear();
        let html = render_with(&result, StatusFilter::All);
        assert!(html.contains("<div class=\"verdict red\">İDARİ RED</div>"));
        assert!(html.contains("18 uygulanabilir kural üzerinden hesaplandı."));
    }

    #[test]
    fn test_findings_heading_uses_rubric_rule_count() {
        let mut result = sample_result();
        result.counts.total_rules = 30;
        let html = render_with(&result, StatusFilter::All);
        assert!(html.contains("Bulgular Listesi (22 Kural)"));
        assert!(!html.contains("(30 Kural)"));
    }

    #[test]
    fn test_evidence_shown_only_when_present() {
        let html = render_with(&sample_result(), StatusFilter::All);
        // Even-numbered fixture rules carry evidence.
        assert_eq!(html.matches("Kanıt:").count(), 11);
    }
}

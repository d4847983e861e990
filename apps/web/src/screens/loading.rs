use crate::screens::layout::escape;

/// Seconds between automatic reloads while analyzing.
pub const REFRESH_SECS: u32 = 3;

pub fn render(candidate_name: &str, file_name: &str, reset_action: &str) -> String {
    format!(
        r#"<section class="card" data-screen="analyzing">
  <div class="spinner" aria-hidden="true"></div>
  <h3>Tez Değerlendiriliyor</h3>
  <p><strong>{}</strong> · {}</p>
  <p>Yapay zeka dökümanı inceliyor ve analiz ediyor...</p>
  <p><small>Bu işlem dosya boyutuna göre 1-2 dakika sürebilir.</small></p>
  <form method="post" action="{}"><button type="submit">İptal</button></form>
</section>"#,
        escape(candidate_name),
        escape(file_name),
        escape(reset_action)
    )
}

use crate::screens::layout::escape;

pub fn render(message: &str, reset_action: &str) -> String {
    format!(
        r#"<section class="card" data-screen="error">
  <h3>Bir Hata Oluştu</h3>
  <p>{}</p>
  <form method="post" action="{}"><button type="submit">Tekrar Dene</button></form>
</section>"#,
        escape(message),
        escape(reset_action)
    )
}

//! Input screen: candidate name + thesis file.

use crate::evaluation::encoder::{DOCX_MEDIA_TYPE, PDF_MEDIA_TYPE};
use crate::screens::layout::escape;

pub const FILE_TYPE_ALERT: &str = "Lütfen sadece PDF veya DOCX formatında dosya yükleyin.";
pub const INCOMPLETE_ALERT: &str = "Lütfen adınızı girin ve tez dosyanızı seçin.";

/// Submission needs a non-blank name and a selected file.
pub fn submission_enabled(name: &str, has_file: bool) -> bool {
    !name.trim().is_empty() && has_file
}

pub struct InputView<'a> {
    /// Form target: `/evaluations` or `/evaluations/{id}/submit`.
    pub action: &'a str,
    pub name: &'a str,
    pub alert: Option<&'a str>,
}

pub fn render(view: &InputView<'_>) -> String {
    let alert = view
        .alert
        .map(|a| format!("<div class=\"alert\" role=\"alert\">{}</div>", escape(a)))
        .unwrap_or_default();
    // No file is ever pre-selected on a fresh render.
    let disabled = if submission_enabled(view.name, false) {
        ""
    } else {
        " disabled"
    };

    format!(
        r#"<section class="card" data-screen="input">
  <h1>Bitirme Tezi Değerlendirme</h1>
  <p>Lütfen bilgilerinizi eksiksiz doldurun ve tez dosyanızı yükleyin.</p>
  {alert}
  <form id="thesis-form" method="post" enctype="multipart/form-data" action="{action}">
    <label for="name">Ad Soyad</label>
    <input id="name" name="name" type="text" value="{name}" placeholder="Adınız ve Soyadınız" autocomplete="name">
    <label for="file">Tez Dosyası</label>
    <input id="file" name="file" type="file" accept=".pdf,.docx">
    <p>PDF, DOCX (Maks 10MB)</p>
    <div>
      <button type="reset">Sıfırla</button>
      <button id="start" type="submit"{disabled}>Başla</button>
    </div>
  </form>
  <p>Değerlendirme süreci 3 aşamadan oluşur: Biçimsel Uygunluk, Etik &amp; Bütünlük, Akademik Rubrik.</p>
</section>
<script>
(function () {{
  var form = document.getElementById("thesis-form");
  var name = document.getElementById("name");
  var file = document.getElementById("file");
  var start = document.getElementById("start");
  var accepted = ["{pdf}", "{docx}"];
  function sync() {{
    start.disabled = !(name.value.trim() && file.files.length);
  }}
  file.addEventListener("change", function () {{
    if (file.files.length && accepted.indexOf(file.files[0].type) < 0) {{
      alert("{file_alert}");
      file.value = "";
    }}
    sync();
  }});
  name.addEventListener("input", sync);
  form.addEventListener("reset", function () {{ setTimeout(sync, 0); }});
}})();
</script>"#,
        action = escape(view.action),
        name = escape(view.name),
        pdf = PDF_MEDIA_TYPE,
        docx = DOCX_MEDIA_TYPE,
        file_alert = FILE_TYPE_ALERT,
    )
}

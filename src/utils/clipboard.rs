use std::time::Duration;

pub const COPIED_RESET: Duration = Duration::from_millis(2000);
pub const LABEL_COPY: &str = "Copiar Chave PIX";
pub const LABEL_COPIED: &str = "Copiado!";

/// Click handler for the "copy PIX key" button. The label flips to
/// `LABEL_COPIED` for `COPIED_RESET` whether or not the clipboard write succeeds.
pub fn copy_button_script(button_id: &str) -> String {
    format!(
        r#"
  var copy = document.getElementById('{button_id}');
  copy.addEventListener('click', function () {{
    if (navigator.clipboard) {{
      navigator.clipboard.writeText(copy.dataset.copy).catch(function () {{}});
    }}
    copy.textContent = '{copied}';
    setTimeout(function () {{ copy.textContent = '{copy}'; }}, {reset_ms});
  }});
"#,
        button_id = button_id,
        copied = LABEL_COPIED,
        copy = LABEL_COPY,
        reset_ms = COPIED_RESET.as_millis(),
    )
}

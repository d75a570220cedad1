use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::submission_models::{Scenario, SubmissionForm, SubmissionStatus};
use crate::utils::clipboard::{self, LABEL_COPY};
use crate::utils::image_utils;

pub struct LandingView<'a> {
    pub form: &'a SubmissionForm,
    pub status: &'a SubmissionStatus,
    pub can_submit: bool,
    pub pix_key: &'a str,
}

pub fn render(view: &LandingView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Meu Amigo Flávio - Gerador de Fotos" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (hero())
                main {
                    (biography())
                    (submission_section(view))
                }
                (footer(view.pix_key))
                script { (PreEscaped(page_script())) }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        header class="hero" {
            p class="hero-tag" { "Gerador de Fotos" }
            h1 class="hero-title" { "MEU AMIGO FLÁVIO" }
            p class="hero-subtitle" { "Um legado de cidadania ao Brasil" }
        }
    }
}

fn biography() -> Markup {
    html! {
        section class="biography" {
            h2 { "Trajetória do Cidadão" }
            div class="bio-grid" {
                div class="bio-card green" {
                    h3 { "Atuação Legislativa" }
                    p { "Décadas de dedicação ao Rio de Janeiro, com foco firme em segurança pública." }
                }
                div class="bio-card gold" {
                    h3 { "Compromisso Nacional" }
                    p { "Representação ativa no cenário nacional, buscando o desenvolvimento econômico." }
                }
            }
        }
    }
}

fn submission_section(view: &LandingView) -> Markup {
    let form = view.form;
    let submitting = view.status.is_submitting();
    let image_label = form
        .image
        .as_ref()
        .map(|image| image.file_name.as_str())
        .unwrap_or("Selecione sua foto");

    html! {
        section class="trend" {
            div class="trend-header" {
                h2 { "Participe da Trend" }
                p { "Envie uma foto sua de cintura para cima e crie uma montagem especial!" }
            }
            form id="photo-form" method="post" action="/" enctype="multipart/form-data" {
                p class="step" { "1. Escolha um Cenário" }
                div class="scenario-grid" {
                    @for scenario in Scenario::ALL {
                        (scenario_tile(scenario, form.scenario == Some(scenario)))
                    }
                }
                div class="field-grid" {
                    input type="email" name="email" placeholder="Seu E-mail" value=(form.email) required;
                    input type="number" name="height" placeholder="Sua Altura (cm)" value=(form.height) required;
                }
                // file inputs can't be pre-filled, so a kept image rides along in hidden fields
                @if let Some(image) = &form.image {
                    input type="hidden" name="retained_image" value=(image_utils::retain_image(&image.data));
                    input type="hidden" name="retained_image_name" value=(image.file_name);
                    input type="hidden" name="retained_image_type" value=(image.media_type);
                }
                label class="upload" {
                    input id="image-input" type="file" name="image" accept="image/*" hidden;
                    span id="image-label" { (image_label) }
                }
                button id="submit-button" type="submit" disabled[!view.can_submit] {
                    @if submitting { "Gerando sua foto..." } @else { "Gerar Minha Foto" }
                }
            }
            @if let Some(message) = view.status.message() {
                div class="status" role="status" { (message) }
            }
        }
    }
}

fn scenario_tile(scenario: Scenario, selected: bool) -> Markup {
    html! {
        label.scenario.selected[selected] {
            input type="radio" name="scenario" value=(scenario.id()) checked[selected];
            img src=(scenario.thumbnail()) alt=(scenario.label());
            p { (scenario.label()) }
        }
    }
}

fn footer(pix_key: &str) -> Markup {
    html! {
        footer class="footer" {
            div class="support" {
                div class="pix" {
                    h4 { "Apoie este Espaço" }
                    p { "Sua contribuição ajuda a manter os custos de processamento de imagem por IA." }
                    p id="pix-key" class="pix-key" { (pix_key) }
                    button id="copy-button" type="button" data-copy=(pix_key) {
                        (LABEL_COPY)
                    }
                }
                div class="qr" {
                    img src="/qrcode.png" alt="QR Code PIX";
                    p { "Escaneie para apoiar" }
                }
            }
            div class="disclaimer" {
                span { "Disclaimer Legal" }
                p {
                    "Uso pessoal e de entretenimento. Sem valor oficial ou propaganda política. "
                    "O usuário é o único responsável pelo uso das imagens geradas."
                }
            }
        }
    }
}

fn page_script() -> String {
    format!(
        r#"
(function () {{
  var form = document.getElementById('photo-form');
  var button = document.getElementById('submit-button');
  var input = document.getElementById('image-input');
  var label = document.getElementById('image-label');
  var retained = form.querySelector('input[name="retained_image"]');
  function refresh() {{
    var scenario = form.querySelector('input[name="scenario"]:checked');
    var file = input.files && input.files[0];
    button.disabled = !(scenario && (file || retained));
  }}
  input.addEventListener('change', function () {{
    var file = input.files && input.files[0];
    if (file && file.type.indexOf('image/') === 0) {{
      label.textContent = file.name;
    }} else {{
      input.value = '';
    }}
    refresh();
  }});
  form.querySelectorAll('input[name="scenario"]').forEach(function (radio) {{
    radio.addEventListener('change', function () {{
      form.querySelectorAll('.scenario').forEach(function (tile) {{
        tile.classList.toggle('selected', tile.contains(radio) && radio.checked);
      }});
      refresh();
    }});
  }});
  form.addEventListener('submit', function () {{
    button.disabled = true;
    button.textContent = 'Gerando sua foto...';
  }});
{copy_handler}}})();
"#,
        copy_handler = clipboard::copy_button_script("copy-button"),
    )
}

const PAGE_CSS: &str = r#"
body { margin: 0; font-family: sans-serif; color: #0f172a; background: #fff; }
.hero { background: #006400; border-bottom: 8px solid #FFD700; padding: 3.5rem 1rem; text-align: center; }
.hero-tag { color: #fff; opacity: .8; letter-spacing: .4em; text-transform: uppercase; font-size: .75rem; }
.hero-title { color: #FFD700; font-size: 4rem; font-style: italic; font-weight: 900; margin: 0; }
.hero-subtitle { color: rgba(255,255,255,.9); font-size: 1.5rem; font-weight: 300; }
main { max-width: 80rem; margin: 0 auto; padding: 4rem 1rem; }
.biography h2, .trend-header h2 { color: #003366; text-align: center; }
.bio-grid, .field-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; }
.bio-card { background: #f8fafc; border-radius: 2rem; padding: 2.5rem; }
.bio-card.green { border-top: 4px solid #006400; }
.bio-card.gold { border-top: 4px solid #FFD700; }
.trend { background: #f8fafc; border-radius: 4rem; padding: 3rem; margin-top: 7rem; }
#photo-form { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 2rem; }
.step { color: #003366; font-weight: 900; text-transform: uppercase; text-align: center; }
.scenario-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.scenario { cursor: pointer; border: 4px solid transparent; border-radius: 2rem; overflow: hidden; background: #fff; text-align: center; }
.scenario input { display: none; }
.scenario.selected { border-color: #006400; }
.scenario img { width: 100%; height: 12rem; object-fit: cover; }
.field-grid input { padding: 1.25rem 2rem; border-radius: 1rem; border: 2px solid #f1f5f9; }
.upload { display: block; cursor: pointer; padding: 3rem; border: 2px dashed #cbd5e1; border-radius: 2rem; text-align: center; background: #fff; }
#submit-button { background: #006400; color: #FFD700; font-weight: 900; font-size: 1.5rem; padding: 1.75rem; border: 0; border-radius: 2rem; text-transform: uppercase; }
#submit-button:disabled { opacity: .3; }
.status { margin-top: 2.5rem; padding: 1.5rem; border-radius: 1rem; background: #003366; color: #fff; text-align: center; font-weight: 700; }
.footer { background: #0b1221; color: #fff; border-top: 8px solid #FFD700; padding: 4rem 1rem 3rem; }
.support { max-width: 56rem; margin: 0 auto; display: flex; flex-wrap: wrap; gap: 3rem; justify-content: center; align-items: center; }
.pix h4 { color: #FFD700; font-size: 1.875rem; font-style: italic; text-transform: uppercase; margin: 0 0 .5rem; }
.pix-key { background: #1a2333; border-radius: .5rem; padding: .75rem; color: #facc15; font-family: monospace; word-break: break-all; }
#copy-button { width: 100%; padding: .75rem; background: #FFD700; border: 0; border-radius: .5rem; font-weight: 900; text-transform: uppercase; }
.qr img { width: 15rem; height: 15rem; background: #fff; padding: .5rem; border-radius: .75rem; }
.disclaimer { margin-top: 4rem; text-align: center; color: #374151; font-size: .5rem; text-transform: uppercase; }
"#;

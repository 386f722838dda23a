use crate::config::Config;
use crate::controller::{visibility, PageState};
use crate::i18n::{Lang, Message};
use crate::render::{OptionsBody, Preview, SelectionView};
use crate::scan::SCAN_PULSE;

pub fn render_page(state: &PageState, config: &Config) -> String {
    let lang = config.lang;
    let vis = visibility(state);
    let selection = state.selection.as_ref();
    let preview = selection.and_then(|view| view.preview.as_ref());

    PAGE_HTML
        .replace("{{LANG}}", lang.code())
        .replace("{{TITLE}}", lang.text(Message::PageTitle))
        .replace("{{SCAN_TITLE}}", lang.text(Message::ScanBarcode))
        .replace("{{CHOOSE_TITLE}}", lang.text(Message::ChooseExpiry))
        .replace("{{BACK}}", lang.text(Message::Back))
        .replace("{{SCANNER_DISPLAY}}", display(vis.scanner))
        .replace("{{SELECTION_DISPLAY}}", display(vis.selection))
        .replace("{{PREVIEW_DISPLAY}}", display(vis.preview))
        .replace("{{AUTOFOCUS}}", if vis.focus_scan_field { "autofocus" } else { "" })
        .replace("{{CODE_VALUE}}", &escape(state.scan_field.value()))
        .replace("{{PREVIEW}}", &render_preview(preview, config))
        .replace("{{OPTIONS}}", &selection.map(|view| render_options(view, config)).unwrap_or_default())
        .replace("{{ALERT}}", &render_alert(state.alert, lang))
        .replace("{{PULSE_COLOR}}", SCAN_PULSE.color)
        .replace("{{PULSE_REST}}", SCAN_PULSE.rest_color)
        .replace("{{PULSE_MS}}", &SCAN_PULSE.revert_after.as_millis().to_string())
}

/// Contents of the `validade-options` container.
pub fn render_options(view: &SelectionView, config: &Config) -> String {
    match &view.body {
        OptionsBody::Notice(text) => format!(
            "<div class=\"error-message\" role=\"status\"><i class=\"bi bi-exclamation-triangle\"></i> {}</div>",
            escape(text)
        ),
        OptionsBody::Controls(controls) => controls
            .iter()
            .map(|control| {
                format!(
                    "<a class=\"validade-btn {status}\" href=\"{href}\" data-id=\"{id}\" aria-label=\"{aria}\"><div class=\"btn-title\">{title}</div><div class=\"btn-sub\">{sub}</div></a>",
                    status = control.status.css_class(),
                    href = escape(&config.public_url(control.navigation.path())),
                    id = control.id,
                    aria = escape(&control.aria_label),
                    title = escape(&control.title),
                    sub = escape(&control.subtitle),
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_preview(preview: Option<&Preview>, config: &Config) -> String {
    let Some(preview) = preview else {
        return "<img id=\"preview-img\" alt=\"\" hidden><div id=\"preview-nome\"></div><div id=\"preview-extra\"></div>".to_string();
    };
    let img = match &preview.image {
        Some(src) => format!(
            "<img id=\"preview-img\" src=\"{}\" alt=\"{}\">",
            escape(&config.public_url(src)),
            escape(&preview.name)
        ),
        None => "<img id=\"preview-img\" alt=\"\" hidden>".to_string(),
    };
    format!(
        "{img}<div id=\"preview-nome\">{}</div><div id=\"preview-extra\">{}</div>",
        escape(&preview.name),
        escape(preview.extra.as_deref().unwrap_or_default())
    )
}

fn render_alert(alert: Option<Message>, lang: Lang) -> String {
    match alert {
        Some(message) => format!(
            "<div id=\"alerta\" class=\"alert\" role=\"alertdialog\" data-alert=\"{0}\">{0}</div>",
            escape(lang.text(message))
        ),
        None => String::new(),
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{LANG}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #1f2933;
      --card: #ffffff;
      --accent: #3ba55d;
      --accent-700: #2a7a44;
      --danger: #c0392b;
      --warn: #e67e22;
      --muted: #7b8794;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 24px;
    }

    .card {
      width: min(560px, 100%);
      background: var(--card);
      border-radius: 18px;
      box-shadow: 0 18px 40px rgba(31, 41, 51, 0.12);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    .scanner-icon i {
      font-size: 3rem;
      color: var(--accent-700);
      transition: color 120ms ease;
    }

    #codigo {
      width: 100%;
      font-size: 1.3rem;
      padding: 12px 14px;
      border-radius: 10px;
      border: 2px solid var(--accent-700);
    }

    #validade-options {
      display: grid;
      gap: 10px;
    }

    .validade-btn {
      display: block;
      padding: 12px 16px;
      border-radius: 12px;
      border: 2px solid var(--accent);
      color: inherit;
      text-decoration: none;
    }

    .validade-btn.vencido {
      border-color: var(--danger);
    }

    .validade-btn.vence-urgente,
    .validade-btn.vence-proximo {
      border-color: var(--warn);
    }

    .btn-title {
      font-weight: 600;
    }

    .btn-sub {
      color: var(--muted);
    }

    #produto-preview img {
      max-width: 120px;
      border-radius: 10px;
    }

    .error-message {
      color: var(--danger);
    }

    .alert {
      padding: 12px 16px;
      border-radius: 10px;
      background: #fdecea;
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="card">
    {{ALERT}}
    <section id="campo-barra" style="display: {{SCANNER_DISPLAY}}">
      <div class="scanner-icon"><i class="bi bi-upc-scan"></i></div>
      <h1>{{SCAN_TITLE}}</h1>
      <form id="form-retirada" method="post" action="/retirada">
        <input id="codigo" name="codigo" type="text" inputmode="numeric" autocomplete="off" value="{{CODE_VALUE}}" {{AUTOFOCUS}} />
      </form>
    </section>

    <section id="campo-validade" style="display: {{SELECTION_DISPLAY}}">
      <div id="produto-preview" style="display: {{PREVIEW_DISPLAY}}">
        {{PREVIEW}}
      </div>
      <h2>{{CHOOSE_TITLE}}</h2>
      <div id="validade-options">
        {{OPTIONS}}
      </div>
      <a id="voltar-btn" href="/retirada/voltar">{{BACK}}</a>
    </section>
  </main>

  <script>
    const codigoInput = document.getElementById('codigo');
    const campoBarra = document.getElementById('campo-barra');
    const scannerIcon = document.querySelector('.scanner-icon i');
    const scanning = () => campoBarra.style.display !== 'none';

    if (scanning()) {
      codigoInput.focus();
    }

    document.addEventListener('click', () => {
      if (scanning()) {
        codigoInput.focus();
      }
    });

    codigoInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter' && !codigoInput.value.trim()) {
        event.preventDefault();
      }
    });

    codigoInput.addEventListener('input', () => {
      scannerIcon.style.color = '{{PULSE_COLOR}}';
      setTimeout(() => { scannerIcon.style.color = '{{PULSE_REST}}'; }, {{PULSE_MS}});
    });

    const alerta = document.getElementById('alerta');
    if (alerta) {
      window.alert(alerta.dataset.alert);
    }
  </script>
</body>
</html>
"#;

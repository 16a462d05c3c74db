use crate::progress::progress;
use crate::settings::{Settings, Theme};

pub fn render_index(date: &str, count: u32, settings: &Settings) -> String {
    let progress = progress(count, settings.goal);
    let greeting = if settings.name.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"greeting\">Olá, {}! Vamos nos hidratar hoje? 💧</p>",
            escape(&settings.name)
        )
    };
    let drink_state = if progress.at_or_over_goal {
        "disabled"
    } else {
        ""
    };

    INDEX_HTML
        .replace("{{PALETTE}}", palette(settings.theme))
        .replace("{{DATE}}", &escape(date))
        .replace("{{COUNT}}", &count.to_string())
        .replace("{{PROGRESS}}", &escape(&progress.display))
        .replace("{{GREETING}}", &greeting)
        .replace("{{DRINK_STATE}}", drink_state)
}

fn palette(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => LIGHT_PALETTE,
        Theme::Dark => DARK_PALETTE,
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const LIGHT_PALETTE: &str = r#"
      --bg-1: #eaf6ff;
      --bg-2: #c9e8ff;
      --ink: #1b3a4b;
      --accent: #2196f3;
      --accent-2: #0d5c91;
      --card: rgba(255, 255, 255, 0.92);
      --muted: #5c7a8a;
"#;

const DARK_PALETTE: &str = r#"
      --bg-1: #0e1c26;
      --bg-2: #14303f;
      --ink: #e4f1f8;
      --accent: #4fb3ff;
      --accent-2: #9ad4ff;
      --card: rgba(20, 48, 63, 0.92);
      --muted: #8aa9b8;
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Lembrete de Água</title>
  <style>
    :root {
{{PALETTE}}
      --shadow: 0 24px 60px rgba(13, 92, 145, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(560px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 20px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: 2rem;
      color: var(--accent-2);
    }

    .date {
      color: var(--muted);
      font-size: 0.95rem;
    }

    .greeting {
      margin: 0;
      color: var(--muted);
      font-size: 1.05rem;
    }

    .counter {
      font-size: 4rem;
      font-weight: 700;
      line-height: 1;
    }

    .progress {
      font-size: 1.2rem;
      color: var(--accent);
      font-weight: 600;
    }

    .actions {
      display: flex;
      gap: 12px;
      justify-content: center;
      flex-wrap: wrap;
    }

    button {
      border: 0;
      border-radius: 12px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: #fff;
    }

    button[disabled] {
      opacity: 0.55;
      cursor: default;
    }

    .drink {
      background: var(--accent);
    }

    .reset {
      background: #809eff;
    }

    details {
      text-align: left;
      color: var(--muted);
      font-size: 0.9rem;
    }

    summary {
      cursor: pointer;
      color: var(--accent-2);
      font-weight: 600;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Lembrete de Água 💧</h1>
    <div class="date">{{DATE}}</div>
    {{GREETING}}
    <div class="counter">{{COUNT}}</div>
    <div class="progress">{{PROGRESS}}</div>
    <div class="actions">
      <form method="post" action="/drink">
        <button class="drink" type="submit" {{DRINK_STATE}}>Bebi um copo!</button>
      </form>
      <form method="post" action="/reset">
        <button class="reset" type="submit">Reiniciar o Dia</button>
      </form>
    </div>
    <details>
      <summary>Como usar o app 💧</summary>
      <ul>
        <li>Toque em "Bebi um copo!" para registrar seu consumo de água.</li>
        <li>Acompanhe o histórico em <code>/api/history</code>.</li>
        <li>Configure notificações, tema, nome e meta diária em <code>/api/settings</code>.</li>
        <li>Use "Reiniciar o Dia" para zerar os copos de hoje sem apagar o histórico.</li>
        <li>Obrigado por usar nosso app 💧</li>
      </ul>
    </details>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shows_count_and_progress() {
        let mut settings = Settings::default();
        settings.goal = 8;
        let html = render_index("05/01/2024", 3, &settings);
        assert!(html.contains("05/01/2024"));
        assert!(html.contains("3 / 8 copos"));
        assert!(!html.contains(r#"type="submit" disabled"#));
    }

    #[test]
    fn index_disables_drink_at_goal() {
        let mut settings = Settings::default();
        settings.goal = 5;
        let html = render_index("05/01/2024", 5, &settings);
        assert!(html.contains(r#"type="submit" disabled"#));
    }

    #[test]
    fn index_greets_by_name_and_escapes_it() {
        let mut settings = Settings::default();
        settings.name = "Ana <3".to_string();
        let html = render_index("05/01/2024", 0, &settings);
        assert!(html.contains("Olá, Ana &lt;3!"));
    }
}

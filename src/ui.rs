use crate::chart::TrendChart;

pub const CHART_MOUNT: &str = "{{TREND_CHART}}";
pub const LEGEND_MOUNT: &str = "{{TREND_LEGEND}}";
pub const SUMMARY_MOUNT: &str = "{{TREND_SUMMARY}}";
pub const PAGE_MOUNT: &str = "{{TREND_PAGE}}";

pub fn has_chart_mount(template: &str) -> bool {
    template.contains(CHART_MOUNT)
}

pub fn render_index(template: &str, chart: Option<(u64, &TrendChart)>) -> String {
    let (page, svg, legend, summary) = match chart {
        Some((page, chart)) => (
            page.to_string(),
            chart.render_svg(),
            chart.render_legend(),
            chart.summary(),
        ),
        None => (String::new(), String::new(), String::new(), String::new()),
    };

    template
        .replace(PAGE_MOUNT, &page)
        .replace(CHART_MOUNT, &svg)
        .replace(LEGEND_MOUNT, &legend)
        .replace(SUMMARY_MOUNT, &summary)
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
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

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Dog Names of the City</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent-2: #2f4858;
      --muted: #bdbdbd;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    nav button {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font: inherit;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    nav button.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    main section {
      display: none;
    }

    main section.active {
      display: grid;
      gap: 16px;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      aspect-ratio: 900 / 420;
    }

    .chart-card text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      font-size: 12px;
      fill: #7a746d;
    }

    .axis line {
      stroke: rgba(47, 72, 88, 0.35);
    }

    .series-line {
      fill: none;
      stroke-width: 2.5;
      transition: stroke 150ms ease, opacity 150ms ease;
    }

    .series-line.muted {
      opacity: 0.6;
    }

    .guideline {
      stroke: rgba(47, 72, 88, 0.4);
      stroke-dasharray: 4 4;
    }

    .focus-dot {
      stroke-width: 2.5;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .legend-chip {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      padding: 6px 14px;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.12);
      background: white;
      font: inherit;
      cursor: pointer;
    }

    .legend-chip.muted {
      color: var(--muted);
    }

    .swatch,
    .trend-tooltip .sw {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 50%;
    }

    .trend-tooltip {
      position: absolute;
      pointer-events: none;
      background: white;
      border-radius: 12px;
      padding: 10px 12px;
      box-shadow: var(--shadow);
      font-size: 0.9rem;
      transition: opacity 120ms ease;
    }

    .trend-tooltip .row {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Dog Names of the City</h1>
      <p class="subtitle">What people call the dogs they license, year by year.</p>
    </header>

    <nav role="tablist">
      <button class="active" type="button" data-page="overview" role="tab" aria-selected="true">Overview</button>
      <button type="button" data-page="trends" role="tab" aria-selected="false">Trends</button>
      <button type="button" data-page="about" role="tab" aria-selected="false">About</button>
    </nav>

    <main>
      <section id="overview" class="active">
        <h2>Overview</h2>
        <p>Every licensed dog in the city comes with a name. Counting those names by the year the license was issued shows which ones stay popular and which ones fade.</p>
        <p class="hint">Open the Trends tab for the chart.</p>
      </section>

      <section id="trends">
        <h2>Top names per year</h2>
        <div id="trend-chart" class="chart-card" data-chart-page="{{TREND_PAGE}}">{{TREND_CHART}}</div>
        <div id="trend-legend" class="legend">{{TREND_LEGEND}}</div>
        <p id="trend-summary">{{TREND_SUMMARY}}</p>
        <p class="hint">Hover the chart for yearly counts. Click a name to mute its line.</p>
      </section>

      <section id="about">
        <h2>About the data</h2>
        <p>Counts come from the municipal dog licensing dataset. Names are trimmed and uppercased before counting; placeholder values such as "Unknown" or "Name not provided" are left out, as are licenses issued before 2000 or after 2025.</p>
      </section>
    </main>
  </div>

  <script>
    (() => {
      const buttons = document.querySelectorAll('nav button');
      const sections = document.querySelectorAll('main section');

      buttons.forEach((btn) => {
        btn.addEventListener('click', () => {
          buttons.forEach((b) => {
            b.classList.remove('active');
            b.setAttribute('aria-selected', 'false');
          });
          sections.forEach((s) => s.classList.remove('active'));

          btn.classList.add('active');
          btn.setAttribute('aria-selected', 'true');
          document.getElementById(btn.dataset.page).classList.add('active');
        });
      });
    })();

    (() => {
      const chartEl = document.getElementById('trend-chart');
      if (!chartEl) {
        return;
      }
      const overlay = chartEl.querySelector('rect.overlay');
      if (!overlay) {
        return;
      }

      const page = Number(chartEl.dataset.chartPage);
      const hoverLayer = chartEl.querySelector('.hover-layer');
      const guideline = hoverLayer.querySelector('.guideline');
      const dots = Array.from(hoverLayer.querySelectorAll('.focus-dot'));
      const lines = Array.from(chartEl.querySelectorAll('.series-line'));
      const chips = Array.from(document.querySelectorAll('#trend-legend .legend-chip'));

      const tooltip = document.createElement('div');
      tooltip.className = 'trend-tooltip';
      tooltip.style.opacity = '0';
      document.body.appendChild(tooltip);

      let inside = false;
      let seq = 0;

      const plotX = (event) => {
        const ctm = overlay.getScreenCTM();
        if (!ctm) {
          return 0;
        }
        return new DOMPoint(event.clientX, event.clientY).matrixTransform(ctm.inverse()).x;
      };

      const applyFrame = (frame, pageX, pageY) => {
        guideline.setAttribute('x1', frame.guideline_x);
        guideline.setAttribute('x2', frame.guideline_x);
        frame.dots.forEach((dot) => {
          const el = dots.find((d) => d.dataset.name === dot.name);
          if (el) {
            el.setAttribute('cx', dot.cx);
            el.setAttribute('cy', dot.cy);
            el.setAttribute('stroke', dot.stroke);
          }
        });
        tooltip.innerHTML = frame.tooltip_html;
        tooltip.style.left = `${pageX + 14}px`;
        tooltip.style.top = `${pageY - 10}px`;
        hoverLayer.style.display = '';
        tooltip.style.opacity = '1';
      };

      overlay.addEventListener('mouseenter', () => {
        inside = true;
      });

      overlay.addEventListener('mouseleave', () => {
        inside = false;
        seq += 1;
        hoverLayer.style.display = 'none';
        tooltip.style.opacity = '0';
      });

      overlay.addEventListener('mousemove', (event) => {
        const id = ++seq;
        const { pageX, pageY } = event;
        fetch(`/api/trend/hover?page=${page}&x=${encodeURIComponent(plotX(event))}`)
          .then((res) => (res.ok ? res.json() : null))
          .then((frame) => {
            if (frame && inside && id === seq) {
              applyFrame(frame, pageX, pageY);
            }
          })
          .catch(() => {});
      });

      const applyStyle = (style) => {
        chips
          .filter((chip) => chip.dataset.name === style.name)
          .forEach((chip) => {
            chip.classList.toggle('muted', style.muted);
            chip.setAttribute('aria-pressed', String(style.muted));
            chip.querySelector('.swatch').style.background = style.stroke;
          });
        lines
          .filter((line) => line.dataset.name === style.name)
          .forEach((line) => {
            line.classList.toggle('muted', style.muted);
            line.setAttribute('stroke', style.stroke);
          });
        dots
          .filter((dot) => dot.dataset.name === style.name)
          .forEach((dot) => dot.setAttribute('stroke', style.stroke));
      };

      chips.forEach((chip) => {
        chip.addEventListener('click', () => {
          fetch('/api/trend/mute', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ page, name: chip.dataset.name })
          })
            .then((res) => (res.ok ? res.json() : null))
            .then((style) => {
              if (style) {
                applyStyle(style);
              }
            })
            .catch(() => {});
        });
      });
    })();
  </script>
</body>
</html>
"##;

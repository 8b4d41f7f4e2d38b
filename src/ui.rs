pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Health Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f4;
      --bg-2: #cfe8e2;
      --ink: #24312e;
      --accent: #2a9d8f;
      --accent-2: #264653;
      --water: #3498db;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(38, 70, 83, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1ec 60%, #f2f8f4 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6b66;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(38, 70, 83, 0.08);
      border-radius: 999px;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #60706a;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(38, 70, 83, 0.12);
    }

    .view {
      display: none;
    }

    .view.active {
      display: grid;
      gap: 24px;
    }

    form.entry {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
      align-items: end;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d8c86;
    }

    .field input {
      border: 1px solid rgba(38, 70, 83, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
      color: var(--ink);
    }

    .field input:focus {
      outline: 2px solid var(--accent);
      outline-offset: 1px;
    }

    button.save {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(42, 157, 143, 0.3);
      transition: transform 150ms ease;
    }

    button.save:active {
      transform: scale(0.98);
    }

    .status {
      font-size: 0.95rem;
      color: #60706a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(38, 70, 83, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #869490;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .detail {
      font-size: 0.9rem;
      font-weight: 600;
    }

    .charts {
      display: grid;
      grid-template-columns: minmax(0, 1.6fr) minmax(0, 1fr);
      gap: 16px;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(38, 70, 83, 0.08);
      display: grid;
      gap: 10px;
    }

    .chart-card h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    #weight-chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #water-chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--water);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--water);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(38, 70, 83, 0.12);
    }

    .chart-label {
      fill: #78857f;
      font-size: 11px;
    }

    .donut-center {
      fill: var(--accent-2);
      font-size: 26px;
      font-weight: 600;
    }

    .donut-caption {
      fill: #78857f;
      font-size: 12px;
    }

    .legend {
      display: flex;
      gap: 16px;
      flex-wrap: wrap;
      font-size: 0.9rem;
      color: #60706a;
    }

    .legend .dot {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
    }

    .history h2 {
      margin: 0 0 10px;
      font-size: 1.2rem;
    }

    .history ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .history li {
      background: white;
      border: 1px solid rgba(38, 70, 83, 0.08);
      border-radius: 14px;
      padding: 12px 16px;
      font-size: 0.95rem;
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .history li strong {
      color: var(--accent-2);
    }

    .hint {
      margin: 0;
      color: #6f7d77;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .charts {
        grid-template-columns: 1fr;
      }
      button.save {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Health Tracker</h1>
        <p class="subtitle">Daily weight, water and sleep, one entry per day.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="entry-view" role="tab" aria-selected="true">Add entry</button>
        <button class="tab" type="button" data-view="dashboard-view" role="tab" aria-selected="false">Dashboard</button>
      </div>
    </header>

    <section id="entry-view" class="view active">
      <form id="entry-form" class="entry" method="post" action="/entry/add">
        <div class="field">
          <label for="date">Date</label>
          <input id="date" name="date" type="date" value="{{TODAY}}" required />
        </div>
        <div class="field">
          <label for="weight">Weight (kg)</label>
          <input id="weight" name="weight" type="number" step="0.1" placeholder="70.5" />
        </div>
        <div class="field">
          <label for="water">Water (L)</label>
          <input id="water" name="water" type="number" step="0.1" placeholder="2.0" />
        </div>
        <div class="field">
          <label for="sleep">Sleep (h)</label>
          <input id="sleep" name="sleep" type="number" step="0.1" placeholder="7.5" />
        </div>
        <button class="save" type="submit">Save entry</button>
      </form>
      <div class="status" id="status"></div>

      <section class="history">
        <h2>Recent entries</h2>
        <ul id="history-list"></ul>
      </section>
      <p class="hint">Saving a second entry for the same date replaces the first.</p>
    </section>

    <section id="dashboard-view" class="view">
      <section class="panel">
        <div class="stat">
          <span class="label">Current BMI</span>
          <span class="value" id="kpi-bmi">--</span>
          <span class="detail" id="kpi-bmi-band"></span>
        </div>
        <div class="stat">
          <span class="label">Avg sleep (7 days)</span>
          <span class="value" id="kpi-sleep">--</span>
        </div>
        <div class="stat">
          <span class="label">Water (7 days)</span>
          <span class="value" id="kpi-water">--</span>
        </div>
      </section>

      <div class="charts">
        <div class="chart-card">
          <h2>Weight, last 30 entries</h2>
          <svg id="weight-chart" viewBox="0 0 600 260" role="img" aria-label="Weight chart"></svg>
        </div>
        <div class="chart-card">
          <h2>7-day water goal (21 L)</h2>
          <svg id="water-chart" viewBox="0 0 260 260" role="img" aria-label="Water goal chart"></svg>
          <div class="legend" id="water-legend"></div>
        </div>
      </div>
      <p class="hint">BMI assumes a height of 1.70 m.</p>
    </section>
  </main>

  <script>
    const form = document.getElementById('entry-form');
    const statusEl = document.getElementById('status');
    const historyEl = document.getElementById('history-list');
    const dateInput = document.getElementById('date');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = Array.from(document.querySelectorAll('.view'));

    const BAND_LABELS = {
      underweight: 'Underweight',
      normal: 'Normal',
      overweight: 'Overweight',
      obese: 'Obese'
    };

    const fmt1 = (value) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      return (Math.round(value * 10) / 10).toFixed(1);
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    // A chart instance owns its drawing surface until destroyed. The
    // dashboard controller below holds at most one live instance per
    // surface and destroys it before creating a replacement.
    const createChart = (el, markup) => {
      el.innerHTML = markup;
      return {
        destroy() {
          el.innerHTML = '';
        }
      };
    };

    const weightChartMarkup = (points) => {
      if (!points.length) {
        return '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.weight);
      let min = Math.min(...values);
      let max = Math.max(...values);
      if (min === max) {
        min -= 1;
        max += 1;
      }
      const span = max - min;
      min -= span * 0.1;
      max += span * 0.1;

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.weight).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${fmt1(value)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 8));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.weight)}" r="4" />`)
        .join('');

      return `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const waterChartMarkup = (goal) => {
      const cx = 130;
      const cy = 130;
      const radius = 84;
      const stroke = 30;
      const circumference = 2 * Math.PI * radius;
      const achievedLen = (goal.achieved_pct / 100) * circumference;

      return `
        <circle cx="${cx}" cy="${cy}" r="${radius}" fill="none" stroke="#d7dfdc" stroke-width="${stroke}" />
        <circle cx="${cx}" cy="${cy}" r="${radius}" fill="none" stroke="#2a9d8f" stroke-width="${stroke}"
          stroke-dasharray="${achievedLen.toFixed(2)} ${circumference.toFixed(2)}"
          transform="rotate(-90 ${cx} ${cy})" />
        <text class="donut-center" x="${cx}" y="${cy}" text-anchor="middle" dominant-baseline="middle">${fmt1(goal.achieved_pct)}%</text>
        <text class="donut-caption" x="${cx}" y="${cy + 26}" text-anchor="middle">of ${goal.goal_liters} L</text>
      `;
    };

    // Dashboard controller: the only holder of chart handles.
    const dashboard = {
      weightChart: null,
      waterChart: null,

      render(data) {
        if (!data) {
          return;
        }

        const band = BAND_LABELS[data.bmi_band] || data.bmi_band;
        const bmiEl = document.getElementById('kpi-bmi');
        const bandEl = document.getElementById('kpi-bmi-band');
        bmiEl.textContent = fmt1(data.bmi);
        bandEl.textContent = `(${band})`;
        bandEl.style.color = data.bmi_color;
        document.getElementById('kpi-sleep').textContent = `${fmt1(data.avg_sleep_7)} h`;
        document.getElementById('kpi-water').textContent = `${fmt1(data.total_water_7)} L`;

        if (this.weightChart) {
          this.weightChart.destroy();
        }
        this.weightChart = createChart(
          document.getElementById('weight-chart'),
          weightChartMarkup(data.weight_series)
        );

        if (this.waterChart) {
          this.waterChart.destroy();
        }
        this.waterChart = createChart(
          document.getElementById('water-chart'),
          waterChartMarkup(data.water_goal)
        );

        document.getElementById('water-legend').innerHTML = `
          <span><span class="dot" style="background:#2a9d8f"></span>Achieved ${fmt1(data.water_goal.achieved_pct)}%</span>
          <span><span class="dot" style="background:#d7dfdc"></span>Remaining ${fmt1(data.water_goal.remaining_pct)}%</span>
        `;
      }
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      dashboard.render(await res.json());
    };

    const loadHistory = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) {
        throw new Error('Unable to load history');
      }
      const records = await res.json();
      if (!records.length) {
        historyEl.innerHTML = '<li>No data yet...</li>';
        return;
      }
      historyEl.innerHTML = records
        .map((r) => `<li><strong>[${r.date}]</strong> <span>Weight: ${r.weight} kg</span> <span>Water: ${r.water} L</span> <span>Sleep: ${r.sleep} h</span></li>`)
        .join('');
    };

    const setActiveView = (viewId) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.view === viewId;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      views.forEach((view) => {
        view.classList.toggle('active', view.id === viewId);
      });
      if (viewId === 'dashboard-view') {
        loadDashboard().catch((err) => setStatus(err.message, 'error'));
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveView(button.dataset.view));
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const pickedDate = dateInput.value;
      const payload = {
        date: dateInput.value,
        weight: document.getElementById('weight').value,
        water: document.getElementById('water').value,
        sleep: document.getElementById('sleep').value
      };

      setStatus('Saving...', 'info');
      fetch('/api/entry', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(async (res) => {
          if (!res.ok) {
            throw new Error((await res.text()) || 'Request failed');
          }
          form.reset();
          dateInput.value = pickedDate;
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 2000);
          return loadHistory();
        })
        .catch((err) => {
          setStatus(err.message, 'error');
          setTimeout(() => setStatus('', ''), 2000);
        });
    });

    loadHistory().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

use super::PAGE_CSS;

/// Live dashboard page. Carries no data of its own: the embedded script
/// polls `/api/data` on the refresh cadence and redraws from the JSON
/// payload, so a failed poll simply keeps the last rendered snapshot.
pub fn render_page(refresh_secs: u64) -> String {
    PAGE_TEMPLATE
        .replace("__CSS__", PAGE_CSS)
        .replace("__REFRESH_MS__", &(refresh_secs * 1000).to_string())
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Live Options Data Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/chartjs-plugin-annotation@3/dist/chartjs-plugin-annotation.min.js"></script>
    <style>
__CSS__
        .view-buttons { display: flex; gap: 6px; margin-bottom: 8px; }
        .panel { background-color: #111; padding: 10px; }
        .metric { font-size: 22px; font-weight: bold; }
        .metric.positive { color: #00ff00; }
        .metric.negative { color: #ff0000; }
    </style>
</head>
<body>
    <div class="view-buttons">
        <button class="legend-btn active" data-view="vol" onclick="switchView(this)">GEX-VOL</button>
        <button class="legend-btn" data-view="oi" onclick="switchView(this)">GEX-OI</button>
    </div>
    <div class="container">
        <div id="chartContainer">
            <canvas id="gexChart"></canvas>
        </div>
        <div class="side-panel">
            <div class="table-container" id="summaryTable"></div>
            <div class="panel">
                <div>Gauge</div>
                <div class="metric" id="gaugeValue">--</div>
            </div>
        </div>
    </div>
    <div class="footer" id="footer">Waiting for data...</div>

    <script>
        const REFRESH_MS = __REFRESH_MS__;
        let view = 'vol';
        let snapshot = null;
        let chart = null;

        const CLASS_FOR_CATEGORY = {
            bullish: 'green-text',
            bearish: 'red-text',
            highlight: 'purple-text',
            none: ''
        };

        function xy(strikes, values) {
            return strikes.map((s, i) => ({ x: s, y: values[i] }));
        }

        function datasets(data) {
            const oi = view === 'oi';
            const pos = oi ? data.pos_gex_oi : data.pos_gex_vol;
            const neg = oi ? data.neg_gex_oi : data.neg_gex_vol;
            const abs = oi ? data.abs_oi : data.abs_vol;
            return [
                {
                    label: oi ? 'GEX-OI +' : 'GEX-VOL +',
                    data: xy(data.strikes, pos),
                    type: 'bar',
                    backgroundColor: '#007bff',
                    stack: 'gex',
                    yAxisID: 'y'
                },
                {
                    label: oi ? 'GEX-OI -' : 'GEX-VOL -',
                    data: xy(data.strikes, neg),
                    type: 'bar',
                    backgroundColor: '#dc3545',
                    stack: 'gex',
                    yAxisID: 'y'
                },
                {
                    label: oi ? 'ABS-OI' : 'ABS-VOL',
                    data: xy(data.strikes, abs),
                    type: 'line',
                    borderColor: oi ? '#6f42c1' : '#8b5cf6',
                    fill: false,
                    tension: 0.1,
                    yAxisID: 'y1',
                    borderWidth: 2
                }
            ];
        }

        function render(data) {
            const config = {
                type: 'bar',
                data: { datasets: datasets(data) },
                options: {
                    responsive: true,
                    maintainAspectRatio: false,
                    animation: false,
                    plugins: {
                        legend: { labels: { color: 'white' } },
                        annotation: {
                            annotations: {
                                spotLine: {
                                    type: 'line',
                                    scaleID: 'x',
                                    value: data.spot,
                                    borderColor: 'white',
                                    borderWidth: 2,
                                    borderDash: [5, 5],
                                    label: {
                                        display: true,
                                        content: 'Spot ' + data.spot,
                                        position: 'start'
                                    }
                                }
                            }
                        }
                    },
                    scales: {
                        x: {
                            type: 'linear',
                            stacked: true,
                            ticks: { color: 'white', stepSize: 1 },
                            grid: { display: false }
                        },
                        y: {
                            stacked: true,
                            position: 'left',
                            ticks: { color: 'white' },
                            grid: { display: false }
                        },
                        y1: {
                            stacked: false,
                            position: 'right',
                            ticks: { color: 'white' },
                            grid: { display: false }
                        }
                    }
                }
            };

            if (chart) {
                chart.data.datasets = config.data.datasets;
                chart.options.plugins.annotation.annotations.spotLine.value = data.spot;
                chart.update('none');
            } else {
                chart = new Chart(document.getElementById('gexChart').getContext('2d'), config);
            }

            renderTable(data.summary);
            renderGauge(data);
        }

        function renderTable(rows) {
            let html = '<table class="table-style"><thead><tr>' +
                '<th>Label</th><th>QQQ</th><th>NQ</th></tr></thead><tbody>';
            for (const row of rows) {
                html += '<tr class="' + (CLASS_FOR_CATEGORY[row.category] || '') + '">' +
                    '<td>' + row.label + '</td>' +
                    '<td>' + row.qqq.toFixed(1) + '</td>' +
                    '<td>' + row.nq.toFixed(1) + '</td></tr>';
            }
            html += '</tbody></table>';
            document.getElementById('summaryTable').innerHTML = html;
        }

        function renderGauge(data) {
            const value = view === 'oi' ? data.gex_oi_gauge : data.gex_vol_gauge;
            const el = document.getElementById('gaugeValue');
            el.textContent = value.toFixed(1) + '%';
            el.className = 'metric ' + (value >= 0 ? 'positive' : 'negative');
        }

        function switchView(btn) {
            view = btn.dataset.view;
            document.querySelectorAll('.legend-btn').forEach(b => b.classList.remove('active'));
            btn.classList.add('active');
            if (snapshot) render(snapshot);
        }

        async function refresh() {
            try {
                const resp = await fetch('/api/data');
                if (!resp.ok) throw new Error('HTTP ' + resp.status);
                snapshot = await resp.json();
                render(snapshot);
                document.getElementById('footer').textContent =
                    'Last updated: ' + new Date().toLocaleString() +
                    ' | Auto-refreshing every ' + (REFRESH_MS / 1000) + 's';
            } catch (err) {
                // Keep the last rendered snapshot; just note the failure.
                document.getElementById('footer').textContent =
                    'Refresh failed (' + err.message + '), showing last data';
            }
        }

        refresh();
        setInterval(refresh, REFRESH_MS);
    </script>
</body>
</html>
"#;

use crate::model::Shaped;

use super::fill_template;

/// Extended chart page: everything on the standalone chart page plus a
/// call/put volume doughnut and a signed gauge bar with an OI/VOL switch.
pub fn render_page(shaped: &Shaped) -> String {
    fill_template(PAGE_TEMPLATE, shaped)
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Options Data Chart</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/chartjs-plugin-annotation@3/dist/chartjs-plugin-annotation.min.js"></script>
    <style>
__CSS__
        .gauge-buttons { display: flex; gap: 6px; margin-bottom: 6px; }
        .panel { background-color: #111; padding: 10px; }
    </style>
</head>
<body>
    <div class="container">
        <div id="chartContainer">
            <canvas id="gexChart"></canvas>
        </div>
        <div class="side-panel">
            <div class="table-container">
__TABLE__
            </div>
            <div class="panel">
                <canvas id="volumePie" height="180"></canvas>
            </div>
            <div class="panel">
                <div class="gauge-buttons">
                    <button class="legend-btn active" data-type="vol" onclick="switchGauge(this)">GEX-VOL</button>
                    <button class="legend-btn" data-type="oi" onclick="switchGauge(this)">GEX-OI</button>
                </div>
                <canvas id="gaugeBar" height="90"></canvas>
            </div>
        </div>
    </div>
    <div class="footer">Generated __GENERATED__</div>

    <script>
__CHART_SCRIPT__

        // ── Call/Put volume doughnut ─────────────────────────────────
        const callVol = __CALL_VOL__;
        const putVol = __PUT_VOL__;
        const sum = pts => pts.reduce((acc, p) => acc + p.y, 0);

        new Chart(document.getElementById('volumePie').getContext('2d'), {
            type: 'doughnut',
            data: {
                labels: ['Call Volume', 'Put Volume'],
                datasets: [{
                    data: [sum(callVol), sum(putVol)],
                    backgroundColor: ['#f59e0b', '#10b981'],
                    borderColor: '#111'
                }]
            },
            options: {
                plugins: {
                    legend: { labels: { color: 'white' } }
                }
            }
        });

        // ── Signed gauge bar, green positive / red negative ──────────
        const gexOiValue = __OI_GAUGE__;
        const gexVolValue = __VOL_GAUGE__;
        let currentValue = gexVolValue;

        const gaugeChart = new Chart(document.getElementById('gaugeBar').getContext('2d'), {
            type: 'bar',
            data: {
                labels: ['Gauge'],
                datasets: [{
                    data: [currentValue],
                    backgroundColor: [currentValue >= 0 ? '#00ff00' : '#ff0000']
                }]
            },
            options: {
                indexAxis: 'y',
                scales: {
                    x: {
                        min: -100,
                        max: 100,
                        ticks: {
                            color: 'white',
                            callback: function(value) { return value + '%'; }
                        },
                        grid: { display: false }
                    },
                    y: { ticks: { color: 'white' }, grid: { display: false } }
                },
                plugins: {
                    legend: { display: false },
                    tooltip: {
                        callbacks: {
                            label: function(item) { return item.parsed.x.toFixed(1) + '%'; }
                        }
                    }
                }
            }
        });

        function switchGauge(btn) {
            currentValue = btn.dataset.type === 'oi' ? gexOiValue : gexVolValue;
            gaugeChart.data.datasets[0].data[0] = currentValue;
            gaugeChart.data.datasets[0].backgroundColor[0] =
                currentValue >= 0 ? '#00ff00' : '#ff0000';
            gaugeChart.update('none');
            document.querySelectorAll('.legend-btn').forEach(b => b.classList.remove('active'));
            btn.classList.add('active');
        }
    </script>
</body>
</html>
"#;

use crate::model::Shaped;

use super::fill_template;

/// Standalone GEX chart page: stacked positive/negative bars per strike,
/// ABS lines on a secondary axis, a dashed spot-price annotation, and the
/// summary table alongside. Self-contained except for the Chart.js CDN.
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
    </style>
</head>
<body>
    <div class="container">
        <div id="chartContainer">
            <canvas id="gexChart"></canvas>
        </div>
        <div class="table-container">
__TABLE__
        </div>
    </div>
    <div class="footer">Generated __GENERATED__</div>

    <script>
__CHART_SCRIPT__
    </script>
</body>
</html>
"#;

/// Chart.js setup shared by the standalone chart page and the pie variant.
/// Expects a `gexChart` canvas in the page and data placeholders filled by
/// `fill_template`.
pub(super) const CHART_SCRIPT: &str = r#"
        const ctx = document.getElementById('gexChart').getContext('2d');
        const spot = __SPOT__;

        const data = {
            datasets: [
                {
                    label: 'GEX-OI',
                    data: __POS_GEX_OI__,
                    type: 'bar',
                    backgroundColor: '#007bff',
                    stack: 'gex-oi',
                    yAxisID: 'y'
                },
                {
                    label: '',
                    data: __NEG_GEX_OI__,
                    type: 'bar',
                    backgroundColor: '#dc3545',
                    stack: 'gex-oi',
                    yAxisID: 'y'
                },
                {
                    label: 'ABS-OI',
                    data: __ABS_OI__,
                    type: 'line',
                    borderColor: '#6f42c1',
                    backgroundColor: '#6f42c1',
                    fill: false,
                    tension: 0.1,
                    yAxisID: 'y1',
                    borderWidth: 2
                },
                {
                    label: 'GEX-VOL',
                    data: __POS_GEX_VOL__,
                    type: 'bar',
                    backgroundColor: '#007bff',
                    stack: 'gex-vol',
                    yAxisID: 'y',
                    hidden: true
                },
                {
                    label: '',
                    data: __NEG_GEX_VOL__,
                    type: 'bar',
                    backgroundColor: '#dc3545',
                    stack: 'gex-vol',
                    yAxisID: 'y',
                    hidden: true
                },
                {
                    label: 'ABS-VOL',
                    data: __ABS_VOL__,
                    type: 'line',
                    borderColor: '#8b5cf6',
                    backgroundColor: '#8b5cf6',
                    fill: false,
                    tension: 0.1,
                    yAxisID: 'y1',
                    borderWidth: 2,
                    hidden: true
                },
                {
                    label: 'Call-VOL',
                    data: __CALL_VOL__,
                    type: 'line',
                    borderColor: '#f59e0b',
                    backgroundColor: '#f59e0b',
                    fill: false,
                    tension: 0.1,
                    yAxisID: 'y1',
                    borderWidth: 2,
                    hidden: true
                },
                {
                    label: 'Put-VOL',
                    data: __PUT_VOL__,
                    type: 'line',
                    borderColor: '#10b981',
                    backgroundColor: '#10b981',
                    fill: false,
                    tension: 0.1,
                    yAxisID: 'y1',
                    borderWidth: 2,
                    hidden: true
                }
            ]
        };

        const config = {
            type: 'bar',
            data: data,
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: {
                        labels: {
                            filter: function(legendItem) {
                                return legendItem.text !== '';
                            },
                            color: 'white',
                            usePointStyle: true
                        },
                        onClick: function(e, legendItem, legend) {
                            const ci = this.chart;
                            const index = legendItem.datasetIndex;
                            // The positive and negative halves of a GEX
                            // stack toggle together.
                            let indices = [index];
                            if (index === 0) {
                                indices = [0, 1];
                            } else if (index === 3) {
                                indices = [3, 4];
                            }
                            indices.forEach(idx => {
                                const meta = ci.getDatasetMeta(idx);
                                meta.hidden = meta.hidden === null
                                    ? !ci.data.datasets[idx].hidden
                                    : !meta.hidden;
                            });
                            ci.update();
                        }
                    },
                    annotation: {
                        annotations: {
                            spotLine: {
                                type: 'line',
                                scaleID: 'x',
                                value: spot,
                                borderColor: 'white',
                                borderWidth: 2,
                                borderDash: [5, 5],
                                label: {
                                    display: true,
                                    content: 'Spot ' + spot,
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
                        ticks: { color: 'white', stepSize: 1, maxRotation: 45 },
                        grid: { display: false }
                    },
                    y: {
                        type: 'linear',
                        position: 'left',
                        stacked: true,
                        ticks: {
                            color: 'white',
                            callback: function(value) { return value.toLocaleString(); }
                        },
                        grid: { display: false }
                    },
                    y1: {
                        type: 'linear',
                        position: 'right',
                        stacked: false,
                        ticks: {
                            color: 'white',
                            maxTicksLimit: 10,
                            callback: function(value) { return value.toLocaleString(); }
                        },
                        grid: { display: false }
                    }
                },
                interaction: { intersect: false, mode: 'index' }
            }
        };

        new Chart(ctx, config);
"#;

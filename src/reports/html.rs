// File: html.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{top_risk_hosts, ReportConfig, ReportData, ReportGenerator, Theme};
use crate::scan::{Host, RiskLevel};

pub struct HtmlGenerator;

impl HtmlGenerator {
    pub fn new() -> Self {
        Self
    }

    fn escape_html(&self, value: &str) -> String {
        value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    fn risk_badge(&self, score: f64) -> String {
        let (class, label) = match RiskLevel::from_score(score) {
            RiskLevel::High => (
                "bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200",
                "High",
            ),
            RiskLevel::Medium => (
                "bg-orange-100 dark:bg-orange-900 text-orange-800 dark:text-orange-200",
                "Medium",
            ),
            RiskLevel::Low => (
                "bg-yellow-100 dark:bg-yellow-900 text-yellow-800 dark:text-yellow-200",
                "Low",
            ),
            RiskLevel::Info => (
                "bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-gray-200",
                "Info",
            ),
        };
        format!(
            r#"<span class="inline-flex items-center px-2 py-1 rounded-full text-xs font-medium {}">{} ({})</span>"#,
            class, label, score
        )
    }

    fn host_label(&self, host: &Host) -> String {
        let address = self.escape_html(host.primary_address().unwrap_or("unknown"));
        match host.display_hostname() {
            Some(name) => format!(
                r#"{} <span class="text-gray-500 dark:text-gray-400">({})</span>"#,
                address,
                self.escape_html(&name)
            ),
            None => address,
        }
    }

    fn render_theme_toggle(&self) -> String {
        r#"
        <script>
        function toggleTheme() {
            const html = document.documentElement;
            const currentTheme = localStorage.getItem('theme') || 'light';
            const newTheme = currentTheme === 'light' ? 'dark' : 'light';

            html.classList.remove('light', 'dark');
            html.classList.add(newTheme);
            localStorage.setItem('theme', newTheme);

            const toggleBtn = document.getElementById('theme-toggle');
            toggleBtn.textContent = newTheme === 'light' ? '🌙' : '☀️';
        }

        document.addEventListener('DOMContentLoaded', function() {
            const savedTheme = localStorage.getItem('theme') || 'light';
            document.documentElement.classList.add(savedTheme);
            const toggleBtn = document.getElementById('theme-toggle');
            if (toggleBtn) {
                toggleBtn.textContent = savedTheme === 'light' ? '🌙' : '☀️';
            }
        });
        </script>
        "#
        .to_string()
    }

    fn render_header(&self, data: &ReportData) -> String {
        let scan_line = match (&data.meta.args, &data.meta.start_str) {
            (Some(args), Some(started)) => {
                format!("{} | {}", self.escape_html(args), self.escape_html(started))
            }
            (Some(args), None) => self.escape_html(args),
            (None, Some(started)) => self.escape_html(started),
            (None, None) => self.escape_html(&data.source_file),
        };

        format!(
            r#"
        <header class="bg-white dark:bg-gray-900 shadow-sm border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-6">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{}</h1>
                        <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                            Generated on {} | {} hosts analyzed
                        </p>
                        <p class="mt-1 text-xs text-gray-400 dark:text-gray-500">{}</p>
                    </div>
                    <div class="flex items-center space-x-4 no-print">
                        <button
                            id="theme-toggle"
                            onclick="toggleTheme()"
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        >
                            🌙
                        </button>
                        <div class="flex items-center text-sm text-gray-500 dark:text-gray-400">
                            <span class="inline-block w-3 h-3 bg-green-500 rounded-full mr-2"></span>
                            scanlens v{}
                        </div>
                    </div>
                </div>
            </div>
        </header>
        "#,
            self.escape_html(&data.title),
            data.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            data.summary.host_count,
            scan_line,
            env!("CARGO_PKG_VERSION")
        )
    }

    fn render_summary_cards(&self, data: &ReportData) -> String {
        let summary = &data.summary;

        format!(
            r#"
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <div class="flex items-center">
                    <div class="flex-shrink-0">
                        <div class="w-8 h-8 bg-blue-100 dark:bg-blue-900 rounded-full flex items-center justify-center">
                            <svg class="w-5 h-5 text-blue-600 dark:text-blue-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"></path>
                            </svg>
                        </div>
                    </div>
                    <div class="ml-4 flex-1">
                        <p class="text-sm font-medium text-gray-500 dark:text-gray-400">Hosts</p>
                        <p class="text-2xl font-bold text-gray-900 dark:text-white">{}</p>
                    </div>
                </div>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <div class="flex items-center">
                    <div class="flex-shrink-0">
                        <div class="w-8 h-8 bg-green-100 dark:bg-green-900 rounded-full flex items-center justify-center">
                            <svg class="w-5 h-5 text-green-600 dark:text-green-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                            </svg>
                        </div>
                    </div>
                    <div class="ml-4 flex-1">
                        <p class="text-sm font-medium text-gray-500 dark:text-gray-400">Open Ports</p>
                        <p class="text-2xl font-bold text-green-600 dark:text-green-400">{}</p>
                    </div>
                </div>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <div class="flex items-center">
                    <div class="flex-shrink-0">
                        <div class="w-8 h-8 bg-purple-100 dark:bg-purple-900 rounded-full flex items-center justify-center">
                            <svg class="w-5 h-5 text-purple-600 dark:text-purple-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9v-9m0-9v9"></path>
                            </svg>
                        </div>
                    </div>
                    <div class="ml-4 flex-1">
                        <p class="text-sm font-medium text-gray-500 dark:text-gray-400">Unique Services</p>
                        <p class="text-2xl font-bold text-purple-600 dark:text-purple-400">{}</p>
                    </div>
                </div>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <div class="flex items-center">
                    <div class="flex-shrink-0">
                        <div class="w-8 h-8 bg-red-100 dark:bg-red-900 rounded-full flex items-center justify-center">
                            <svg class="w-5 h-5 text-red-600 dark:text-red-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"></path>
                            </svg>
                        </div>
                    </div>
                    <div class="ml-4 flex-1">
                        <p class="text-sm font-medium text-gray-500 dark:text-gray-400">High Risk Hosts</p>
                        <p class="text-2xl font-bold text-red-600 dark:text-red-400">{}</p>
                    </div>
                </div>
            </div>
        </div>
        "#,
            summary.host_count, summary.open_ports, summary.unique_services, summary.high_risk_hosts
        )
    }

    fn render_risk_distribution(&self, data: &ReportData) -> String {
        let dist = &data.summary.risk_distribution;
        let total = data.summary.host_count.max(1);

        let mut html = format!(
            r#"
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 mb-8">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-6">Risk Distribution</h2>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                <div class="text-center">
                    <div class="text-2xl font-bold text-red-600 dark:text-red-400">{}</div>
                    <div class="text-sm text-gray-500 dark:text-gray-400">High (75-100)</div>
                </div>
                <div class="text-center">
                    <div class="text-2xl font-bold text-orange-600 dark:text-orange-400">{}</div>
                    <div class="text-sm text-gray-500 dark:text-gray-400">Medium (40-74)</div>
                </div>
                <div class="text-center">
                    <div class="text-2xl font-bold text-yellow-600 dark:text-yellow-400">{}</div>
                    <div class="text-sm text-gray-500 dark:text-gray-400">Low (1-39)</div>
                </div>
                <div class="text-center">
                    <div class="text-2xl font-bold text-gray-600 dark:text-gray-400">{}</div>
                    <div class="text-sm text-gray-500 dark:text-gray-400">Info (0)</div>
                </div>
            </div>
            <div class="space-y-2">
        "#,
            dist.high, dist.medium, dist.low, dist.info
        );

        let buckets = [
            ("High", dist.high, "bg-red-500"),
            ("Medium", dist.medium, "bg-orange-500"),
            ("Low", dist.low, "bg-yellow-500"),
            ("Info", dist.info, "bg-gray-400"),
        ];
        for (label, count, bar_class) in buckets {
            let percentage = count * 100 / total;
            html.push_str(&format!(
                r#"
                <div class="flex justify-between items-center">
                    <span class="text-sm text-gray-700 dark:text-gray-300">{}</span>
                    <span class="text-sm font-medium text-gray-900 dark:text-white">{} ({}%)</span>
                </div>
                <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                    <div class="{} h-2 rounded-full" style="width: {}%"></div>
                </div>
                "#,
                label, count, percentage, bar_class, percentage
            ));
        }

        html.push_str("</div></div>");
        html
    }

    fn render_top_risk_hosts(&self, data: &ReportData, config: &ReportConfig) -> String {
        let ranked = top_risk_hosts(&data.hosts, config.top_n);
        if ranked.is_empty() {
            return r#"
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 mb-8">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">Riskiest Hosts</h2>
                <div class="text-center py-8">
                    <div class="w-16 h-16 bg-green-100 dark:bg-green-900 rounded-full flex items-center justify-center mx-auto mb-4">
                        <svg class="w-8 h-8 text-green-600 dark:text-green-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.031 9-11.622 0-1.042-.133-2.052-.382-3.016z"></path>
                        </svg>
                    </div>
                    <h3 class="text-lg font-medium text-gray-900 dark:text-white">No Elevated Risk Detected</h3>
                    <p class="text-gray-500 dark:text-gray-400 mt-2">Every host in this scan scored zero.</p>
                </div>
            </div>
            "#.to_string();
        }

        let mut html = String::from(
            r#"
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden mb-8">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">Riskiest Hosts</h2>
            </div>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">#</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Host</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Risk</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Risk Factors</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
        "#,
        );

        for (i, host) in ranked.iter().enumerate() {
            let factors = if host.risk_factors.is_empty() {
                r#"<span class="text-gray-500 dark:text-gray-400 italic">None</span>"#.to_string()
            } else {
                let mut list: Vec<String> = host
                    .risk_factors
                    .iter()
                    .take(3)
                    .map(|f| format!("<li>{}</li>", self.escape_html(f)))
                    .collect();
                if host.risk_factors.len() > 3 {
                    list.push(format!(
                        r#"<li class="text-gray-500 dark:text-gray-400">+{} more</li>"#,
                        host.risk_factors.len() - 3
                    ));
                }
                format!(
                    r#"<ul class="list-disc list-inside space-y-1">{}</ul>"#,
                    list.join("")
                )
            };

            html.push_str(&format!(
                r#"
                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                    <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">{}</td>
                    <td class="px-6 py-4 text-sm font-medium text-gray-900 dark:text-white">{}</td>
                    <td class="px-6 py-4 text-sm">{}</td>
                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{}</td>
                </tr>
                "#,
                i + 1,
                self.host_label(host),
                self.risk_badge(host.risk_score.unwrap_or(0.0)),
                factors
            ));
        }

        html.push_str("</tbody></table></div></div>");
        html
    }

    fn render_distributions(&self, data: &ReportData) -> String {
        if data.summary.top_ports.is_empty() && data.summary.service_distribution.is_empty() {
            return String::new();
        }

        let mut html = String::from(
            r#"<div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8">"#,
        );

        if !data.summary.top_ports.is_empty() {
            let max = data.summary.top_ports[0].count.max(1);
            html.push_str(
                r#"
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-6">Top Open Ports</h2>
                <div class="space-y-2">
            "#,
            );
            for entry in &data.summary.top_ports {
                let percentage = entry.count * 100 / max;
                html.push_str(&format!(
                    r#"
                    <div class="flex justify-between items-center">
                        <span class="text-sm text-gray-700 dark:text-gray-300">Port {}</span>
                        <span class="text-sm font-medium text-gray-900 dark:text-white">{}</span>
                    </div>
                    <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                        <div class="bg-blue-600 h-2 rounded-full" style="width: {}%"></div>
                    </div>
                    "#,
                    self.escape_html(&entry.port),
                    entry.count,
                    percentage
                ));
            }
            html.push_str("</div></div>");
        }

        if !data.summary.service_distribution.is_empty() {
            html.push_str(
                r#"
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-6">Service Distribution</h2>
                <div class="flex flex-wrap gap-2">
            "#,
            );
            for entry in &data.summary.service_distribution {
                html.push_str(&format!(
                    r#"<span class="inline-flex items-center px-3 py-1 rounded-full text-sm bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200">{} ({})</span>"#,
                    self.escape_html(&entry.service),
                    entry.count
                ));
            }
            html.push_str("</div></div>");
        }

        html.push_str("</div>");
        html
    }

    fn render_hosts_table(&self, data: &ReportData) -> String {
        let mut hosts: Vec<&Host> = data.hosts.iter().collect();
        hosts.sort_by_key(|h| h.ipv4_sort_key());

        let mut html = String::from(
            r#"
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden mb-8">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">All Hosts</h2>
            </div>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Address</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Hostname</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">OS</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Open Ports</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Risk</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
        "#,
        );

        for host in hosts {
            let hostname = host
                .display_hostname()
                .map(|n| self.escape_html(&n))
                .unwrap_or_else(|| {
                    r#"<span class="text-gray-500 dark:text-gray-400 italic">—</span>"#.to_string()
                });
            let os = host
                .os_name()
                .map(|n| self.escape_html(n))
                .unwrap_or_else(|| {
                    r#"<span class="text-gray-500 dark:text-gray-400 italic">Unknown</span>"#
                        .to_string()
                });

            html.push_str(&format!(
                r#"
                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                    <td class="px-6 py-4 text-sm font-medium text-gray-900 dark:text-white">{}</td>
                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{}</td>
                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{}</td>
                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{}</td>
                    <td class="px-6 py-4 text-sm">{}</td>
                </tr>
                "#,
                self.escape_html(host.primary_address().unwrap_or("unknown")),
                hostname,
                os,
                host.open_port_count(),
                self.risk_badge(host.risk_score.unwrap_or(0.0))
            ));
        }

        html.push_str("</tbody></table></div></div>");
        html
    }

    fn render_host_details(&self, data: &ReportData) -> String {
        let mut hosts: Vec<&Host> = data.hosts.iter().collect();
        hosts.sort_by_key(|h| h.ipv4_sort_key());

        let mut html = String::from(
            r#"<h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">Host Details</h2>"#,
        );

        for host in hosts {
            html.push_str(&format!(
                r#"
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 mb-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{}</h3>
                    {}
                </div>
                "#,
                self.host_label(host),
                self.risk_badge(host.risk_score.unwrap_or(0.0))
            ));

            let open_ports = host.open_ports();
            if open_ports.is_empty() {
                html.push_str(
                    r#"<p class="text-sm text-gray-500 dark:text-gray-400 italic">No open ports.</p>"#,
                );
            } else {
                html.push_str(
                    r#"
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead>
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Port</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Service</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Product</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">Scripts</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                "#,
                );
                for port in open_ports {
                    let product = port
                        .service
                        .as_ref()
                        .and_then(|s| s.product.as_deref())
                        .map(|p| {
                            let version = port
                                .service
                                .as_ref()
                                .and_then(|s| s.version.as_deref())
                                .unwrap_or("");
                            self.escape_html(format!("{} {}", p, version).trim_end())
                        })
                        .unwrap_or_else(|| "—".to_string());
                    let scripts = port
                        .findings()
                        .iter()
                        .map(|s| self.escape_html(&s.id))
                        .collect::<Vec<_>>()
                        .join(", ");

                    html.push_str(&format!(
                        r#"
                        <tr>
                            <td class="px-4 py-2 text-sm font-medium text-gray-900 dark:text-white">{}/{}</td>
                            <td class="px-4 py-2 text-sm text-gray-700 dark:text-gray-300">{}</td>
                            <td class="px-4 py-2 text-sm text-gray-700 dark:text-gray-300">{}</td>
                            <td class="px-4 py-2 text-sm text-gray-700 dark:text-gray-300">{}</td>
                        </tr>
                        "#,
                        self.escape_html(&port.port_id),
                        self.escape_html(&port.protocol),
                        self.escape_html(port.service_label()),
                        product,
                        if scripts.is_empty() { "—".to_string() } else { scripts }
                    ));
                }
                html.push_str("</tbody></table></div>");
            }

            if !host.risk_factors.is_empty() {
                html.push_str(
                    r#"
                <div class="mt-4">
                    <h4 class="text-sm font-medium text-gray-900 dark:text-white mb-2">Risk Factors</h4>
                    <ul class="list-disc list-inside space-y-1 text-sm text-gray-700 dark:text-gray-300">
                "#,
                );
                for factor in &host.risk_factors {
                    html.push_str(&format!("<li>{}</li>", self.escape_html(factor)));
                }
                html.push_str("</ul></div>");
            }

            html.push_str("</div>");
        }

        html
    }

    fn render_footer(&self) -> String {
        format!(
            r#"
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700 mt-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex justify-between items-center">
                    <div class="text-sm text-gray-500 dark:text-gray-400">
                        Generated by scanlens v{} | Nmap Scan Report Viewer
                    </div>
                    <div class="text-sm text-gray-500 dark:text-gray-400">
                        Report format: HTML | Theme: Auto-switching
                    </div>
                </div>
            </div>
        </footer>
        "#,
            env!("CARGO_PKG_VERSION")
        )
    }
}

impl ReportGenerator for HtmlGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        let theme_class = match config.theme {
            Theme::Dark => "dark",
            Theme::Light => "",
            Theme::Auto => "",
        };

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en" class="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            darkMode: 'class',
            theme: {{
                extend: {{
                    fontFamily: {{
                        'sans': ['Inter', 'system-ui', 'sans-serif'],
                    }},
                }}
            }}
        }}
    </script>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
    {}
    <style>
        @media print {{
            .no-print {{ display: none !important; }}
        }}
    </style>
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {}

    <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
        {}
        {}
        {}
        {}
        {}
        {}
    </main>

    {}
</body>
</html>"#,
            theme_class,
            self.escape_html(&data.title),
            self.render_theme_toggle(),
            self.render_header(data),
            self.render_summary_cards(data),
            self.render_risk_distribution(data),
            self.render_top_risk_hosts(data, config),
            self.render_distributions(data),
            self.render_hosts_table(data),
            self.render_host_details(data),
            self.render_footer()
        );
        Ok(html)
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn content_type(&self) -> &'static str {
        "text/html"
    }

    fn supports_themes(&self) -> bool {
        true
    }
}

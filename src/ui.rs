use crate::controller::Controller;
use crate::data::Dataset;
use crate::filter::filter_promises;
use crate::models::{PromiseRecord, StatColor, StatRecord, Status, Tab, ViewState, TABS};
use crate::surface::{Fragments, Mount, Surface};

/// Badge, progress bar and icon treatment for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub badge: &'static str,
    pub bar: &'static str,
    pub icon: Option<&'static str>,
    pub label: &'static str,
}

pub fn status_style(status: &Status) -> StatusStyle {
    match status {
        Status::Fulfilled => StatusStyle {
            badge: "bg-green-100 text-green-800 border-green-300",
            bar: "bg-green-500",
            icon: Some("check-circle"),
            label: "Fulfilled",
        },
        Status::InProgress => StatusStyle {
            badge: "bg-yellow-100 text-yellow-800 border-yellow-300",
            bar: "bg-yellow-500",
            icon: Some("clock"),
            label: "In progress",
        },
        Status::Delayed => StatusStyle {
            badge: "bg-red-100 text-red-800 border-red-300",
            bar: "bg-red-500",
            icon: Some("x-circle"),
            label: "Delayed",
        },
        Status::Unrecognized(_) => StatusStyle {
            badge: "bg-gray-100 text-gray-800 border-gray-300",
            bar: "bg-gray-500",
            icon: None,
            label: "Unknown",
        },
    }
}

/// Tailwind classes for the stat icon tile, as (background, foreground).
pub fn stat_palette(color: StatColor) -> (&'static str, &'static str) {
    match color {
        StatColor::Blue => ("bg-blue-100", "text-blue-600"),
        StatColor::Green => ("bg-green-100", "text-green-600"),
        StatColor::Yellow => ("bg-yellow-100", "text-yellow-600"),
        StatColor::Purple => ("bg-purple-100", "text-purple-600"),
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn stats_markup(stats: &[StatRecord]) -> String {
    stats
        .iter()
        .map(|stat| {
            let (bg, fg) = stat_palette(stat.color);
            format!(
                r#"
<div class="bg-white rounded-xl p-6 shadow-lg border border-gray-100 hover:shadow-xl transition">
  <div class="w-12 h-12 {bg} rounded-lg flex items-center justify-center mb-4">
    <i data-lucide="{icon}" class="w-6 h-6 {fg}"></i>
  </div>
  <p class="text-3xl font-bold text-gray-900 mb-1">{value}</p>
  <p class="text-sm text-gray-600">{label}</p>
</div>"#,
                icon = escape_html(&stat.icon),
                value = escape_html(&stat.value),
                label = escape_html(&stat.label),
            )
        })
        .collect()
}

pub fn tabs_markup(active: Tab) -> String {
    TABS.iter()
        .map(|&tab| {
            let look = if tab == active {
                "bg-blue-600 text-white"
            } else {
                "bg-gray-100 text-gray-700 hover:bg-gray-200"
            };
            let pressed = tab == active;
            format!(
                r#"
<button type="button" data-tab="{tab}" aria-pressed="{pressed}" class="tab-button px-4 py-3 rounded-lg font-medium whitespace-nowrap transition {look}">
  {label}
</button>"#,
                label = tab.label(),
            )
        })
        .collect()
}

pub fn promise_card(promise: &PromiseRecord) -> String {
    let style = status_style(&promise.status);
    let icon = style
        .icon
        .map(|name| format!(r#"<i data-lucide="{name}" class="w-5 h-5"></i>"#))
        .unwrap_or_default();
    let progress = promise.progress.min(100);

    format!(
        r#"
<div class="bg-white rounded-xl shadow-lg p-6 border border-gray-200 hover:shadow-xl transition" data-promise-id="{id}">
  <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
    <div class="flex-1">
      <div class="flex items-center gap-3 mb-2">
        <span class="px-3 py-1 rounded-full text-sm font-semibold border {badge} flex items-center gap-2">
          {icon}
          {status}
        </span>
        <span class="text-sm text-gray-500">{region}</span>
      </div>
      <h4 class="text-xl font-bold text-gray-900 mb-2">{text}</h4>
      <p class="text-sm text-gray-600 mb-3">
        <strong>By:</strong> {politician} &bull; <strong>Category:</strong> {category}
      </p>
    </div>
  </div>

  <div class="mb-4">
    <div class="flex justify-between text-sm text-gray-600 mb-2">
      <span>Progress: {progress}%</span>
      <span>Promised: {promised}</span>
    </div>
    <div class="w-full bg-gray-200 rounded-full h-3">
      <div class="h-3 rounded-full transition-all {bar}" style="width: {progress}%"></div>
    </div>
  </div>

  <div class="bg-gray-50 rounded-lg p-4">
    <p class="text-sm text-gray-700 mb-2">
      <strong>Latest Evidence ({updated}):</strong>
    </p>
    <p class="text-sm text-gray-600">{evidence}</p>
  </div>

  <div class="mt-4 flex gap-3">
    <button type="button" class="text-blue-600 text-sm font-semibold hover:underline">View Full Timeline</button>
    <button type="button" class="text-blue-600 text-sm font-semibold hover:underline">Share Report</button>
  </div>
</div>"#,
        id = promise.id,
        badge = style.badge,
        status = style.label,
        region = escape_html(&promise.region),
        text = escape_html(&promise.promise),
        politician = escape_html(&promise.politician),
        category = escape_html(&promise.category),
        promised = escape_html(&promise.date_promised),
        bar = style.bar,
        updated = escape_html(&promise.last_update),
        evidence = escape_html(&promise.evidence),
    )
}

pub fn promises_markup(promises: &[&PromiseRecord]) -> String {
    promises.iter().copied().map(promise_card).collect()
}

pub fn render_stats<S: Surface + ?Sized>(surface: &mut S, stats: &[StatRecord]) {
    if !surface.has_container(Mount::Stats) {
        return;
    }
    surface.replace_content(Mount::Stats, stats_markup(stats));
    surface.create_icons();
}

pub fn render_tabs<S: Surface + ?Sized>(surface: &mut S, view: &ViewState) {
    if !surface.has_container(Mount::Tabs) {
        return;
    }
    surface.replace_content(Mount::Tabs, tabs_markup(view.active_tab));
    surface.create_icons();
}

pub fn render_promises<S: Surface + ?Sized>(surface: &mut S, promises: &[PromiseRecord], view: &ViewState) {
    if !surface.has_container(Mount::Promises) {
        return;
    }
    let visible = filter_promises(promises, view);
    surface.replace_content(Mount::Promises, promises_markup(&visible));
    surface.create_icons();
}

/// Full page with every view pre-rendered for the session's current state.
pub fn render_index(data: &Dataset, session: &Controller) -> String {
    let mut surface = Fragments::page();
    session.start(data, &mut surface);

    let expanded = session.nav.is_expanded();
    let (menu_hidden, menu_icon_hidden, close_icon_hidden) = if expanded {
        ("", "hidden", "")
    } else {
        ("hidden", "", "hidden")
    };

    fill_template(
        INDEX_HTML,
        &[
            ("MENU_HIDDEN", menu_hidden),
            ("MENU_ICON_HIDDEN", menu_icon_hidden),
            ("CLOSE_ICON_HIDDEN", close_icon_hidden),
            ("EXPANDED", if expanded { "true" } else { "false" }),
            ("STATS", surface.content(Mount::Stats).unwrap_or_default()),
            ("TABS", surface.content(Mount::Tabs).unwrap_or_default()),
            ("PROMISES", surface.content(Mount::Promises).unwrap_or_default()),
            ("QUERY", &escape_html(&session.view.search_query)),
        ],
    )
}

/// Substitutes `{{KEY}}` markers in one pass; inserted values are never scanned again.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Promise Tracker</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script src="https://unpkg.com/lucide@latest"></script>
  <style>
    body {
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    .tab-button:focus-visible {
      outline: 2px solid #2563eb;
      outline-offset: 2px;
    }
  </style>
</head>
<body class="bg-gray-50 text-gray-900 min-h-screen">
  <nav class="bg-white shadow-sm sticky top-0 z-10">
    <div class="max-w-6xl mx-auto px-4 flex items-center justify-between h-16">
      <a href="/" class="flex items-center gap-2 text-xl font-bold text-blue-600">
        <i data-lucide="shield-check" class="w-6 h-6"></i>
        Promise Tracker
      </a>
      <div class="hidden md:flex gap-6 text-gray-600 font-medium">
        <a href="#promises" class="hover:text-blue-600">Promises</a>
        <a href="#stats" class="hover:text-blue-600">Statistics</a>
        <a href="/api/promises" class="hover:text-blue-600">Data</a>
      </div>
      <button id="mobile-menu-button" type="button" class="md:hidden p-2 rounded-lg hover:bg-gray-100" aria-controls="mobile-menu" aria-expanded="{{EXPANDED}}">
        <span id="menu-icon" class="menu-icon {{MENU_ICON_HIDDEN}}"><i data-lucide="menu" class="w-6 h-6"></i></span>
        <span id="close-icon" class="close-icon {{CLOSE_ICON_HIDDEN}}"><i data-lucide="x" class="w-6 h-6"></i></span>
      </button>
    </div>
    <div id="mobile-menu" class="md:hidden border-t border-gray-100 px-4 py-3 space-y-2 {{MENU_HIDDEN}}">
      <a href="#promises" class="block text-gray-700">Promises</a>
      <a href="#stats" class="block text-gray-700">Statistics</a>
      <a href="/api/promises" class="block text-gray-700">Data</a>
    </div>
  </nav>

  <main class="max-w-6xl mx-auto px-4 py-10 space-y-10">
    <header class="text-center space-y-3">
      <h1 class="text-4xl font-bold">Track what was promised</h1>
      <p class="text-gray-600">Public commitments, their progress, and the evidence behind each update.</p>
      <div class="max-w-xl mx-auto relative">
        <i data-lucide="search" class="w-5 h-5 text-gray-400 absolute left-3 top-3"></i>
        <input id="search-input" type="search" value="{{QUERY}}" placeholder="Search by promise, politician or state" autocomplete="off"
          class="w-full pl-10 pr-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500" />
      </div>
    </header>

    <section id="stats" class="grid grid-cols-2 md:grid-cols-4 gap-6">
      <div id="stats-container" class="contents">{{STATS}}</div>
    </section>

    <section id="promises" class="space-y-6">
      <div id="tabs-container" class="flex gap-2 overflow-x-auto" role="toolbar">{{TABS}}</div>
      <div id="promises-list" class="space-y-6">{{PROMISES}}</div>
    </section>
  </main>

  <script>
    const tabs = document.getElementById('tabs-container');
    const searchInput = document.getElementById('search-input');
    const menuButton = document.getElementById('mobile-menu-button');
    const applied = {};

    // Responses can land out of order; never let an older revision overwrite a newer one.
    const fresh = (target, revision) => {
      if ((applied[target] || 0) > revision) return false;
      applied[target] = revision;
      return true;
    };

    const apply = (payload) => {
      payload.updates.forEach(({ target, html }) => {
        const el = document.getElementById(target);
        if (el && fresh(target, payload.revision)) el.innerHTML = html;
      });
      payload.visibility.forEach(({ target, hidden }) => {
        const el = document.getElementById(target);
        if (el && fresh(target, payload.revision)) el.classList.toggle('hidden', hidden);
      });
      if (menuButton) {
        const panel = document.getElementById('mobile-menu');
        menuButton.setAttribute('aria-expanded', String(panel && !panel.classList.contains('hidden')));
      }
      if (payload.refresh_icons && window.lucide) {
        lucide.createIcons();
      }
    };

    const send = async (event) => {
      const res = await fetch('/api/events', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(event)
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      apply(await res.json());
    };

    const report = (err) => console.error(err);

    if (tabs) {
      tabs.addEventListener('click', (event) => {
        const button = event.target.closest('[data-tab]');
        if (!button || !tabs.contains(button)) return;
        send({ type: 'select_tab', tab: button.dataset.tab }).catch(report);
      });
    }

    if (searchInput) {
      searchInput.addEventListener('input', (event) => {
        send({ type: 'search', query: event.target.value }).catch(report);
      });
    }

    if (menuButton) {
      menuButton.addEventListener('click', () => {
        send({ type: 'toggle_menu' }).catch(report);
      });
    }

    if (window.lucide) {
      lucide.createIcons();
    }
  </script>
</body>
</html>
"##;

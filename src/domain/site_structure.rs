//! Turns hub-labelled keywords into one page row per hub.

use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::configuration::SiteSettings;

pub const MAIN_HUB: &str = "маникюр (главная)";
pub const PROMO_HUB: &str = "акции и скидки на маникюр";
const REMOVAL_HUB: &str = "снятие маникюра";

const SIBLING_POOL: usize = 6;
const MAX_SIBLING_LINKS: usize = 5;

pub struct Hub {
    pub key: &'static str,
    pub slug: &'static str,
    pub title_name: &'static str,
    pub h1_name: &'static str,
}

const fn hub(
    key: &'static str,
    slug: &'static str,
    title_name: &'static str,
    h1_name: &'static str,
) -> Hub {
    Hub {
        key,
        slug,
        title_name,
        h1_name,
    }
}

pub const HUBS: &[Hub] = &[
    hub(MAIN_HUB, "/", "Маникюр и педикюр", "Маникюр и педикюр"),
    hub("мужской маникюр", "/muzhskoy-manikyur", "Мужской маникюр", "Мужской маникюр"),
    hub("японский маникюр", "/yaponskiy-manikyur", "Японский маникюр", "Японский маникюр"),
    hub("пилочный маникюр", "/pilochnyy-manikyur", "Пилочный маникюр", "Пилочный маникюр"),
    hub(
        "медицинский маникюр",
        "/meditsinskiy-manikyur",
        "Медицинский маникюр",
        "Медицинский (лечебный) маникюр",
    ),
    hub(
        "маникюр и педикюр в 4 руки",
        "/manikyur-v-4-ruki",
        "Маникюр и педикюр в 4 руки",
        "Маникюр и педикюр в 4 руки",
    ),
    hub("аппаратный маникюр", "/apparatnyy-manikyur", "Аппаратный маникюр", "Аппаратный маникюр"),
    hub(
        "комбинированный маникюр",
        "/kombinirovannyy-manikyur",
        "Комбинированный маникюр",
        "Комбинированный маникюр",
    ),
    hub("детский маникюр", "/detskiy-manikyur", "Детский маникюр", "Детский маникюр"),
    hub(
        "гигиенический маникюр",
        "/gigienicheskiy-manikyur",
        "Гигиенический маникюр",
        "Гигиенический маникюр",
    ),
    hub(
        "классический маникюр",
        "/klassicheskiy-manikyur",
        "Классический маникюр",
        "Классический (обрезной) маникюр",
    ),
    hub(
        "европейский маникюр",
        "/evropeyskiy-manikyur",
        "Европейский маникюр",
        "Европейский (необрезной) маникюр",
    ),
    hub(
        "маникюр с покрытием",
        "/manikyur-s-pokrytiem",
        "Маникюр с покрытием",
        "Маникюр с покрытием гель-лаком",
    ),
    hub("маникюр luxio", "/manikyur-luxio", "Маникюр Luxio", "Маникюр с покрытием Luxio"),
    hub("маникюр без покрытия", "/manikyur-bez-pokrytiya", "Маникюр без покрытия", "Маникюр без покрытия"),
    hub("наращивание ногтей", "/narashchivanie-nogtey", "Наращивание ногтей", "Наращивание ногтей"),
    hub("маникюр втирка", "/manikyur-vtirka", "Маникюр с втиркой", "Маникюр с втиркой"),
    hub("пудровый маникюр", "/pudrovyy-manikyur", "Пудровый маникюр", "Пудровый маникюр (дип-система)"),
    hub("маникюр омбре", "/manikyur-ombre", "Маникюр омбре", "Маникюр омбре (градиент)"),
    hub("френч маникюр", "/french-manikyur", "Френч маникюр", "Французский маникюр (френч)"),
    hub("креативный маникюр", "/kreativnyy-manikyur", "Креативный маникюр", "Креативный (арт) маникюр"),
    hub("спа маникюр", "/spa-manikyur", "СПА маникюр", "СПА маникюр"),
    hub("экспресс маникюр", "/ekspress-manikyur", "Экспресс маникюр", "Экспресс маникюр"),
    hub("корейский маникюр", "/koreyskiy-manikyur", "Корейский маникюр", "Корейский маникюр"),
    hub(REMOVAL_HUB, "/snyatie-manikyura", "Снятие маникюра", "Снятие маникюра"),
    hub(PROMO_HUB, "/aktsii-manikyur", "Акции и скидки на маникюр", "Акции и скидки на маникюр"),
    hub("маникюр с дизайном", "/manikyur-s-dizaynom", "Маникюр с дизайном", "Маникюр с дизайном"),
    hub("немецкий маникюр", "/nemetskiy-manikyur-lcn", "Немецкий маникюр LCN", "Немецкий маникюр LCN"),
    hub("пленочный маникюр", "/plenochnyy-manikyur", "Плёночный маникюр", "Плёночный маникюр"),
];

pub fn find_hub(key: &str) -> Option<&'static Hub> {
    let key = key.trim().to_lowercase();
    HUBS.iter().find(|h| h.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_volume(volume: f64) -> Self {
        if volume >= 50.0 {
            Priority::High
        } else if volume >= 10.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

fn section(hub: &Hub) -> &'static str {
    match hub.key {
        MAIN_HUB => "Главная",
        PROMO_HUB => "Промо",
        _ => "Услуги",
    }
}

fn meta_description(hub: &Hub, site: &SiteSettings) -> String {
    let display = hub.title_name;
    match hub.key {
        MAIN_HUB => format!(
            "{} в {} — салон {} на {}, {}. Запись онлайн, доступные цены, опытные мастера.",
            display, site.city_full, site.brand, site.address_short, site.district
        ),
        PROMO_HUB => format!(
            "Актуальные акции и скидки на маникюр в салоне {} в {}. Выгодные предложения для новых и постоянных клиентов.",
            site.brand, site.city
        ),
        REMOVAL_HUB => format!(
            "{} гель-лаком в {} — салон {}. Бережное снятие покрытия аппаратом. Запись онлайн.",
            display, site.city_full, site.brand
        ),
        _ => format!(
            "{} в {} — салон {} на {}. Цены, запись онлайн, опытные мастера.",
            display, site.city_full, site.brand, site.address_short
        ),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HubKeyword {
    pub query: String,
    pub volume: f64,
    pub hub: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRow {
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "H1")]
    pub h1: String,
    #[serde(rename = "Meta Description")]
    pub meta_description: String,
    #[serde(rename = "Parent Page")]
    pub parent_page: Option<String>,
    #[serde(rename = "Internal Links")]
    pub internal_links: String,
    #[serde(rename = "Combined Search Volume")]
    pub combined_volume: f64,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Queries")]
    pub queries: String,
}

fn format_volume(volume: f64) -> String {
    match volume.fract() == 0.0 {
        true => format!("{}", volume as i64),
        false => format!("{}", volume),
    }
}

fn queries_block(queries: &[(String, f64)]) -> String {
    queries
        .iter()
        .map(|(q, v)| format!("{} [{}]", q, format_volume(*v)))
        .join("\n")
}

/// Keywords with an unknown hub are dropped with a warning.
pub fn assemble_site_structure(keywords: Vec<HubKeyword>, site: &SiteSettings) -> Vec<PageRow> {
    let mut hub_queries: HashMap<&'static str, Vec<(String, f64)>> = HashMap::new();

    for keyword in keywords {
        match find_hub(&keyword.hub) {
            Some(hub) => hub_queries
                .entry(hub.key)
                .or_default()
                .push((keyword.query, keyword.volume)),
            None => log::warn!(
                "Skipping '{}': hub '{}' is not in the catalog",
                keyword.query,
                keyword.hub
            ),
        }
    }

    for queries in hub_queries.values_mut() {
        queries.sort_by(|a, b| b.1.total_cmp(&a.1));
    }

    let total_of = |queries: &[(String, f64)]| queries.iter().map(|(_, v)| v).sum::<f64>();

    // Always present, even with no keywords of its own.
    let main_hub = &HUBS[0];
    let main_queries = hub_queries.remove(MAIN_HUB).unwrap_or_default();

    let hub_list: Vec<(&'static Hub, f64, Vec<(String, f64)>)> = hub_queries
        .into_iter()
        .filter_map(|(key, queries)| find_hub(key).map(|h| (h, total_of(&queries), queries)))
        .sorted_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.key.cmp(b.0.key)))
        .collect();

    let main_links = hub_list
        .iter()
        .map(|(h, _, _)| h)
        .sorted_by_key(|h| h.key)
        .map(|h| h.slug)
        .join(", ");

    let mut rows = Vec::with_capacity(hub_list.len() + 1);

    rows.push(PageRow {
        section: section(main_hub).to_string(),
        url: main_hub.slug.to_string(),
        title: format!(
            "{} в {} | Салон {} — {}",
            main_hub.title_name, site.city, site.brand, site.address_short
        ),
        h1: format!("{} в {} — салон {}", main_hub.h1_name, site.city_full, site.brand),
        meta_description: meta_description(main_hub, site),
        parent_page: None,
        internal_links: main_links,
        combined_volume: total_of(&main_queries),
        priority: Priority::High.as_str().to_string(),
        queries: queries_block(&main_queries),
    });

    for (hub, total_volume, queries) in hub_list.iter() {
        let siblings = hub_list
            .iter()
            .take(SIBLING_POOL)
            .filter(|(h, _, _)| h.key != hub.key && h.slug != hub.slug)
            .map(|(h, _, _)| h.slug)
            .take(MAX_SIBLING_LINKS);
        let internal_links = std::iter::once(main_hub.slug).chain(siblings).join(", ");

        rows.push(PageRow {
            section: section(hub).to_string(),
            url: hub.slug.to_string(),
            title: format!("{} в {} | Салон {}", hub.title_name, site.city, site.brand),
            h1: format!("{} в {}", hub.h1_name, site.city_full),
            meta_description: meta_description(hub, site),
            parent_page: Some(main_hub.slug.to_string()),
            internal_links,
            combined_volume: *total_volume,
            priority: Priority::from_volume(*total_volume).as_str().to_string(),
            queries: queries_block(queries),
        });
    }

    rows
}

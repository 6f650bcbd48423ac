use chrono::NaiveDate;

struct SitemapEntry {
    path: &'static str,
    change_frequency: &'static str,
    priority: f32,
}

const SITEMAP: [SitemapEntry; 2] = [
    SitemapEntry {
        path: "",
        change_frequency: "daily",
        priority: 1.0,
    },
    SitemapEntry {
        path: "/search",
        change_frequency: "daily",
        priority: 0.8,
    },
];

pub fn sitemap_xml(site_url: &str, last_modified: NaiveDate) -> String {
    let urls: String = SITEMAP
        .iter()
        .map(|entry| {
            format!(
                "<url><loc>{}{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{:.1}</priority></url>\n",
                site_url,
                entry.path,
                last_modified.format("%Y-%m-%d"),
                entry.change_frequency,
                entry.priority
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        urls
    )
}

pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-Agent: *\nAllow: /\nDisallow: /private/\n\nHost: {0}\nSitemap: {0}/sitemap.xml\n",
        site_url
    )
}

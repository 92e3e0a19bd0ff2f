use md2wx::{
    link_converter, ConvertOptions, FootnoteRegistrar, LinkConverterOptions, MarkdownToWechat,
    StyleRole, StyleRule, Theme,
};
use std::cell::RefCell;

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() >> 33) as usize % items.len()]
    }
}

/// Appends every registration and returns its position.
#[derive(Default)]
struct CountingRegistrar {
    calls: RefCell<Vec<(String, String)>>,
}

impl FootnoteRegistrar for CountingRegistrar {
    fn add(&self, label: &str, target: &str) -> usize {
        let mut calls = self.calls.borrow_mut();
        calls.push((label.to_string(), target.to_string()));
        calls.len()
    }
}

const STYLE: &str = "color:red;";

fn theme() -> Theme {
    Theme::empty().with_rule(StyleRole::Link, StyleRule::new().with("color", "red"))
}

#[test]
fn randomized_link_policy_invariants() {
    let hrefs = [
        "https://mp.weixin.qq.com/s/abc",
        "http://mp.weixin.qq.com/s?__biz=1",
        "https://example.com",
        "https://example.com/a?b=c",
        "",
    ];
    let titles = ["", "A title"];
    let texts = ["click here", "https://example.com", "", "https://mp.weixin.qq.com/s/abc"];

    let theme = theme();
    let mut rng = Lcg::new(0x11AC_2026_1019);

    for i in 0..200 {
        let href = rng.pick(&hrefs);
        let title = rng.pick(&titles);
        let text = rng.pick(&texts);
        let enabled = rng.next_bool();
        let with_registrar = rng.next_bool();

        let registrar = CountingRegistrar::default();
        let options = LinkConverterOptions::new(
            enabled,
            if with_registrar {
                Some(&registrar as &dyn FootnoteRegistrar)
            } else {
                None
            },
        );

        let html = link_converter(&theme, &options, href, title, text);
        let calls = registrar.calls.borrow().clone();
        let label = if title.is_empty() { text } else { title };

        if href.contains("mp.weixin.qq.com") {
            assert_eq!(
                html,
                format!(r#"<a href="{href}" title="{label}" style="{STYLE}">{text}</a>"#),
                "iteration {i}"
            );
            assert!(calls.is_empty(), "iteration {i}");
        } else if href == text {
            assert_eq!(html, text, "iteration {i}");
            assert!(calls.is_empty(), "iteration {i}");
        } else if enabled && with_registrar {
            assert_eq!(
                calls,
                vec![(label.to_string(), href.to_string())],
                "iteration {i}"
            );
            assert_eq!(
                html,
                format!(r#"<span style="{STYLE}">{text}</span><sup>[1]</sup>"#),
                "iteration {i}"
            );
        } else {
            assert_eq!(
                html,
                format!(r#"<span style="{STYLE}">{text}</span>"#),
                "iteration {i}"
            );
            assert!(calls.is_empty(), "iteration {i}");
        }
    }
}

#[test]
fn repeated_conversion_is_stable_except_for_new_citations() {
    let registrar = CountingRegistrar::default();
    let theme = theme();
    let options = LinkConverterOptions::new(true, Some(&registrar));

    let first = link_converter(&theme, &options, "https://a.example", "", "a");
    let second = link_converter(&theme, &options, "https://b.example", "", "b");

    assert_eq!(first, r#"<span style="color:red;">a</span><sup>[1]</sup>"#);
    assert_eq!(second, r#"<span style="color:red;">b</span><sup>[2]</sup>"#);
}

#[test]
fn randomized_documents_number_citations_in_order() {
    let targets = ["https://a.example", "https://b.example", "https://c.example"];
    let mut rng = Lcg::new(0xD0C5_0001);

    for i in 0..24 {
        let mut markdown = String::new();
        let mut expected_order: Vec<&str> = Vec::new();

        for p in 0..6 {
            let target = rng.pick(&targets);
            markdown.push_str(&format!("Para {p} cites [link]({target}).\n\n"));
            if !expected_order.contains(&target) {
                expected_order.push(target);
            }
        }

        let converter =
            MarkdownToWechat::new(ConvertOptions::default()).with_theme(Theme::empty());
        let html = converter
            .convert_str(&markdown)
            .unwrap_or_else(|e| panic!("conversion failed on iteration {i}: {e}"));

        for (idx, target) in expected_order.iter().enumerate() {
            let entry = format!(r#"[{}]</span>link: <i style="">{}</i>"#, idx + 1, target);
            assert!(html.contains(&entry), "iteration {i}: missing {entry}");
        }
        assert!(
            !html.contains(&format!("<sup>[{}]</sup>", expected_order.len() + 1)),
            "iteration {i}: unexpected extra citation"
        );
    }
}

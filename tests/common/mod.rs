//! Test utilities and Javadoc page fixtures for the javadoc test suite

use mockito::{Mock, Server};

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// Path of a package page relative to the Javadoc root
#[allow(dead_code)]
pub fn package_path(package: &str) -> String {
    format!("{}/package-summary.html", package.replace('.', "/"))
}

/// JDK 17 style overview listing `packages`
#[allow(dead_code)]
pub fn modern_index(packages: &[&str]) -> String {
    let rows: String = packages
        .iter()
        .map(|p| {
            format!(
                r#"<div class="col-first even-row-color all-packages-table"><a href="{}">{p}</a></div>
<div class="col-last even-row-color all-packages-table"><div class="block">About {p}</div></div>"#,
                package_path(p)
            )
        })
        .collect();
    create_test_html(
        "Overview",
        &format!(
            r#"<main role="main"><div id="all-packages-table"><div class="table-tabs" role="tablist"></div>
<div class="summary-table two-column-summary">{rows}</div></div></main>"#
        ),
    )
}

/// JDK 17 style package page listing `classes` as `(name, link title kind)`
#[allow(dead_code)]
pub fn modern_package(package: &str, classes: &[(&str, &str)]) -> String {
    let rows: String = classes
        .iter()
        .map(|(name, kind)| {
            format!(
                r#"<div class="col-first even-row-color"><a href="{name}.html" title="{kind} in {package}">{name}</a></div>
<div class="col-last even-row-color"><div class="block">{name} summary</div></div>"#
            )
        })
        .collect();
    create_test_html(
        package,
        &format!(
            r#"<main role="main"><div class="header"><h1 class="title">Package {package}</h1></div>
<div id="class-summary"><div class="table-tabs"></div><div class="summary-table two-column-summary">{rows}</div></div></main>"#
        ),
    )
}

/// JDK 17 style class page with one `()` method per name in `methods`
#[allow(dead_code)]
pub fn modern_class(package: &str, name: &str, methods: &[&str]) -> String {
    let details: String = methods
        .iter()
        .map(|m| {
            format!(
                r#"<li><section class="detail" id="{m}()"><h3>{m}</h3>
<div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="return-type">void</span>&nbsp;<span class="element-name">{m}</span>()</div>
<div class="block">Runs <code>{m}</code>.</div></section></li>"#
            )
        })
        .collect();
    create_test_html(
        name,
        &format!(
            r##"<main role="main"><div class="header">
<div class="sub-title"><span class="package-label-in-type">Package</span>&nbsp;<a href="package-summary.html">{package}</a></div>
<h1 title="Class {name}" class="title">Class {name}</h1></div>
<div class="inheritance" title="Inheritance Tree"><a href="#">java.lang.Object</a>
<div class="inheritance">{package}.{name}</div></div>
<section class="class-description" id="class-description"><div class="block">The {name} class.</div></section>
<section class="details"><ul class="details-list"><li><section class="method-details" id="method-detail">
<h2>Method Details</h2><ul class="member-list">{details}</ul></section></li></ul></section></main>"##
        ),
    )
}

/// JDK 8 style overview listing `packages`
#[allow(dead_code)]
pub fn legacy_index(packages: &[&str]) -> String {
    let rows: String = packages
        .iter()
        .map(|p| {
            format!(
                r#"<tr class="altColor"><td class="colFirst"><a href="{}">{p}</a></td><td class="colLast">&nbsp;</td></tr>"#,
                package_path(p)
            )
        })
        .collect();
    create_test_html(
        "Overview",
        &format!(
            r#"<div class="contentContainer"><table class="overviewSummary" border="0" cellpadding="3" cellspacing="0" summary="Packages table">
<tr><th class="colFirst" scope="col">Package</th><th class="colLast" scope="col">Description</th></tr>{rows}</table></div>"#
        ),
    )
}

/// JDK 8 style frameset index pointing at `overview-summary.html`
#[allow(dead_code)]
pub fn legacy_frameset() -> String {
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">
<html><head><title>API</title></head>
<frameset cols="20%,80%" title="Documentation frame">
<frameset rows="30%,70%"><frame src="overview-frame.html" name="packageListFrame"><frame src="allclasses-frame.html" name="packageFrame"></frameset>
<frame src="overview-summary.html" name="classFrame" scrolling="yes">
</frameset></html>"#
        .to_string()
}

/// JDK 8 style package page listing `classes` as `(name, link title kind)`
#[allow(dead_code)]
pub fn legacy_package(package: &str, classes: &[(&str, &str)]) -> String {
    let rows: String = classes
        .iter()
        .map(|(name, kind)| {
            format!(
                r#"<tr class="altColor"><td class="colFirst"><a href="{name}.html" title="{kind} in {package}">{name}</a></td><td class="colLast">&nbsp;</td></tr>"#
            )
        })
        .collect();
    create_test_html(
        package,
        &format!(
            r#"<div class="header"><h1 title="Package" class="title">Package&nbsp;{package}</h1></div>
<div class="contentContainer"><ul class="blockList"><li class="blockList">
<table class="typeSummary" border="0" summary="Class Summary table"><tr><th class="colFirst">Class</th><th class="colLast">Description</th></tr>{rows}</table>
</li></ul></div>"#
        ),
    )
}

/// JDK 8 style class page with one `()` method per name in `methods`
#[allow(dead_code)]
pub fn legacy_class(package: &str, name: &str, methods: &[&str]) -> String {
    let details: String = methods
        .iter()
        .map(|m| {
            format!(
                r#"<a name="{m}--"></a><ul class="blockList"><li class="blockList"><h4>{m}</h4>
<pre>public&nbsp;int&nbsp;{m}()</pre><div class="block">Computes <tt>{m}</tt>.</div>
<dl><dt><span class="returnLabel">Returns:</span></dt><dd>the value</dd></dl></li></ul>"#
            )
        })
        .collect();
    create_test_html(
        name,
        &format!(
            r#"<div class="header"><div class="subTitle">{package}</div>
<h2 title="Class {name}" class="title">Class {name}</h2></div>
<div class="contentContainer"><ul class="inheritance"><li>java.lang.Object</li><li><ul class="inheritance"><li>{package}.{name}</li></ul></li></ul>
<div class="description"><ul class="blockList"><li class="blockList"><pre>public class {name}</pre><div class="block">The {name} class.</div></li></ul></div>
<div class="details"><ul class="blockList"><li class="blockList"><ul class="blockList"><li class="blockList">
<h3>Method Detail</h3>{details}</li></ul></li></ul></div></div>"#
        ),
    )
}

/// A page without any Javadoc markers
#[allow(dead_code)]
pub fn plain_page() -> String {
    create_test_html("Hello", "<h1>Hello</h1><p>Nothing to see.</p>")
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Compares two markdown strings, normalizing whitespace
#[allow(dead_code)]
pub fn assert_markdown_eq(actual: &str, expected: &str) {
    let normalize = |s: &str| {
        s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let actual_normalized = normalize(actual);
    let expected_normalized = normalize(expected);

    if actual_normalized != expected_normalized {
        println!("=== ACTUAL ===\n{actual}\n");
        println!("=== EXPECTED ===\n{expected}\n");
        panic!("Markdown content does not match");
    }
}

/// Lines of `markdown` that start with `prefix`, in order
#[allow(dead_code)]
pub fn lines_starting_with<'a>(markdown: &'a str, prefix: &str) -> Vec<&'a str> {
    markdown.lines().filter(|l| l.starts_with(prefix)).collect()
}

/// Helper to create test URLs
#[allow(dead_code)]
pub fn test_url(server: &Server, path: &str) -> String {
    format!("{}{}", server.url(), path)
}

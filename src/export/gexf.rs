//! GEXF 1.2 exporter
//!
//! Writes the network in the Graph Exchange XML Format read by Gephi.
//! Node attributes `team_id` and `team_name` are declared once and attached
//! per node; team colors go out as `viz:color` so Gephi opens with the same
//! coloring as the plot.
//!
//! Reference: https://gexf.net/schema.html

use crate::graph::PassNetwork;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::fmt::Write as _;

const GEXF_NS: &str = "http://www.gexf.net/1.2draft";
const VIZ_NS: &str = "http://www.gexf.net/1.2draft/viz";
const GEXF_SCHEMA: &str = "http://www.gexf.net/1.2draft http://www.gexf.net/1.2draft/gexf.xsd";

const ATTR_TEAM_ID: &str = "0";
const ATTR_TEAM_NAME: &str = "1";

/// Render the network as GEXF, stamped with today's date
pub fn render(network: &PassNetwork) -> Result<String> {
    render_dated(network, Local::now().date_naive())
}

/// Render the network as GEXF with an explicit `lastmodifieddate`
pub fn render_dated(network: &PassNetwork, date: NaiveDate) -> Result<String> {
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    writeln!(
        xml,
        r#"<gexf xmlns="{GEXF_NS}" xmlns:viz="{VIZ_NS}" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="{GEXF_SCHEMA}" version="1.2">"#
    )?;
    writeln!(xml, r#"  <meta lastmodifieddate="{}">"#, date.format("%Y-%m-%d"))?;
    writeln!(xml, "    <creator>passnet {}</creator>", env!("CARGO_PKG_VERSION"))?;
    xml.push_str("    <description>Accurate-pass network between players</description>\n");
    xml.push_str("  </meta>\n");
    xml.push_str("  <graph defaultedgetype=\"undirected\" mode=\"static\">\n");

    xml.push_str("    <attributes class=\"node\" mode=\"static\">\n");
    writeln!(xml, r#"      <attribute id="{ATTR_TEAM_ID}" title="team_id" type="long" />"#)?;
    writeln!(xml, r#"      <attribute id="{ATTR_TEAM_NAME}" title="team_name" type="string" />"#)?;
    xml.push_str("    </attributes>\n");

    render_nodes(&mut xml, network)?;
    render_edges(&mut xml, network)?;

    xml.push_str("  </graph>\n</gexf>\n");
    Ok(xml)
}

fn render_nodes(xml: &mut String, network: &PassNetwork) -> Result<()> {
    xml.push_str("    <nodes>\n");
    for node in network.nodes() {
        let id = xml_escape(&node.name);
        let Some(team) = &node.team else {
            writeln!(xml, r#"      <node id="{id}" label="{id}" />"#)?;
            continue;
        };
        writeln!(xml, r#"      <node id="{id}" label="{id}">"#)?;
        xml.push_str("        <attvalues>\n");
        writeln!(xml, r#"          <attvalue for="{ATTR_TEAM_ID}" value="{}" />"#, team.id)?;
        writeln!(
            xml,
            r#"          <attvalue for="{ATTR_TEAM_NAME}" value="{}" />"#,
            xml_escape(&team.name)
        )?;
        xml.push_str("        </attvalues>\n");
        let c = team.color;
        writeln!(xml, r#"        <viz:color r="{}" g="{}" b="{}" />"#, c.0, c.1, c.2)?;
        xml.push_str("      </node>\n");
    }
    xml.push_str("    </nodes>\n");
    Ok(())
}

fn render_edges(xml: &mut String, network: &PassNetwork) -> Result<()> {
    xml.push_str("    <edges>\n");
    for (i, edge) in network.edges().enumerate() {
        writeln!(
            xml,
            r#"      <edge id="{i}" source="{}" target="{}" weight="{}" />"#,
            xml_escape(&edge.source.name),
            xml_escape(&edge.target.name),
            edge.weight
        )?;
    }
    xml.push_str("    </edges>\n");
    Ok(())
}

/// Escape text for use in an XML attribute value
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            // Not representable in XML 1.0
            c if (c as u32) < 0x20 => out.push('\u{FFFD}'),
            c => out.push(c),
        }
    }
    out
}

use minidns_domain::ResourceRecord;
use std::fmt::Write;

/// Renders a table snapshot as a column-aligned listing, one record
/// per line in rank order.
pub fn render_table(records: &[ResourceRecord]) -> String {
    let mut out = String::new();
    out.push_str("#, Name, Type, Result, TTL, Static\n");
    for record in records {
        let ttl = match record.ttl {
            Some(ttl) => ttl.to_string(),
            None => "None".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<4}{:<20}{:<8}{:<20}{:<8}{}",
            record.rank, record.name, record.rtype, record.result, ttl, record.is_static
        );
    }
    out
}

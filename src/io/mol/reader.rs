use crate::io::{Format, error::Error, util};
use crate::model::topology::{RepeatUnitRecord, Topology};
use crate::model::types::Point;
use std::collections::BTreeMap;
use std::io::BufRead;

type Line = (usize, String);

/// Reads the first record of a MOL V2000 file.
///
/// Polymer brackets come from `SRU` S-groups; all other S-group types are
/// ignored. Atom and bond numbers in the file are 1-based and are converted.
pub fn read<R: BufRead>(reader: R) -> Result<Topology, Error> {
    let lines = collect_first_block(reader)?;
    if lines.len() < 4 {
        return Err(Error::parse(
            Format::Mol,
            1,
            "MOL block must contain a header and a counts line",
        ));
    }

    let (counts_line_no, counts_line) = &lines[3];
    if counts_line.contains("V3000") {
        return Err(Error::parse(
            Format::Mol,
            *counts_line_no,
            "V3000 is not supported",
        ));
    }
    let (atom_count, bond_count) = parse_counts(counts_line, *counts_line_no)?;

    let body = &lines[4..];
    let atom_end = body
        .iter()
        .position(|(_, l)| !is_atom_line(l))
        .unwrap_or(body.len());
    let bond_end = atom_end
        + body[atom_end..]
            .iter()
            .position(|(_, l)| !is_bond_line(l))
            .unwrap_or(body.len() - atom_end);

    check_count("atom", atom_count, atom_end, *counts_line_no)?;
    check_count("bond", bond_count, bond_end - atom_end, *counts_line_no)?;

    let mut topology = Topology::new();
    for (ln, raw) in &body[..atom_end] {
        parse_atom(&mut topology, raw, *ln)?;
    }
    for (ln, raw) in &body[atom_end..bond_end] {
        parse_bond(&mut topology, raw, *ln)?;
    }

    let properties = body[bond_end..]
        .iter()
        .take_while(|(_, l)| !l.starts_with("M  END"));
    let mut groups = SGroups::default();
    for (ln, raw) in properties {
        groups.apply(raw, *ln)?;
    }
    for unit in groups.into_repeat_units(&topology) {
        topology.add_repeat_unit(unit);
    }

    log::debug!(
        "read MOL block: {} atoms, {} bonds, {} repeat units",
        topology.atom_count(),
        topology.bond_count(),
        topology.repeat_units.len()
    );
    Ok(topology)
}

fn collect_first_block<R: BufRead>(reader: R) -> Result<Vec<Line>, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let content = line?;
        if content.trim() == "$$$$" && !lines.is_empty() {
            break;
        }
        lines.push((i + 1, content));
    }
    Ok(lines)
}

fn parse_counts(line: &str, line_no: usize) -> Result<(usize, usize), Error> {
    let field = |start: usize, end: usize, what: &str| {
        util::column(line, start, end)
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Mol, line_no, format!("invalid {what} count")))
    };
    Ok((field(0, 3, "atom")?, field(3, 6, "bond")?))
}

fn check_count(what: &'static str, declared: usize, parsed: usize, line: usize) -> Result<(), Error> {
    if declared == parsed {
        Ok(())
    } else {
        Err(Error::Topology {
            what,
            declared,
            parsed,
            line,
        })
    }
}

/// Atom lines carry three coordinates followed by a symbol.
fn is_atom_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    let coords = tokens
        .by_ref()
        .take(3)
        .filter(|t| t.parse::<f64>().is_ok())
        .count();
    coords == 3 && tokens.next().is_some_and(|t| t.parse::<f64>().is_err())
}

/// Bond lines are all-integer with at least three fields.
fn is_bond_line(line: &str) -> bool {
    !line.starts_with('M')
        && line.split_whitespace().count() >= 3
        && line.split_whitespace().all(|t| t.parse::<i64>().is_ok())
}

fn parse_atom(topology: &mut Topology, raw: &str, ln: usize) -> Result<(), Error> {
    let coord = |start: usize, end: usize, axis: &str| {
        util::column(raw, start, end).parse::<f64>().map_err(|_| {
            Error::parse(Format::Mol, ln, format!("invalid {axis} coordinate in atom line"))
        })
    };
    let x = coord(0, 10, "x")?;
    let y = coord(10, 20, "y")?;
    let symbol = util::column(raw, 31, 34);
    let element = util::element_from_ctfile(symbol).ok_or_else(|| {
        Error::parse(Format::Mol, ln, format!("unknown element symbol '{symbol}'"))
    })?;
    topology.add_atom(element, [x, y]);
    Ok(())
}

fn parse_bond(topology: &mut Topology, raw: &str, ln: usize) -> Result<(), Error> {
    let int = |start: usize, end: usize, what: &str| {
        util::column(raw, start, end)
            .parse::<i32>()
            .map_err(|_| Error::parse(Format::Mol, ln, format!("invalid {what} in bond line")))
    };
    let a1 = int(0, 3, "first atom index")?;
    let a2 = int(3, 6, "second atom index")?;
    let order_val = int(6, 9, "bond order")?;
    let stereo_val = match util::column(raw, 9, 12) {
        "" => 0,
        _ => int(9, 12, "stereo flag")?,
    };

    let i = atom_index(a1, topology.atom_count(), ln)?;
    let j = atom_index(a2, topology.atom_count(), ln)?;
    let order = util::bond_order_from_ctfile(order_val).ok_or(Error::UnsupportedBondOrder {
        value: order_val,
        line: ln,
    })?;
    let index = topology.add_bond(i, j, order);
    topology.bonds[index].stereo = util::bond_stereo_from_ctfile(stereo_val);
    Ok(())
}

fn atom_index(value: i32, atom_count: usize, ln: usize) -> Result<usize, Error> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v >= 1 && v <= atom_count)
        .map(|v| v - 1)
        .ok_or_else(|| {
            Error::parse(
                Format::Mol,
                ln,
                format!("bond references atom {value} outside 1..={atom_count}"),
            )
        })
}

#[derive(Debug, Default)]
struct SGroup {
    kind: String,
    atoms: Vec<usize>,
    bonds: Vec<usize>,
    lines: Vec<[Point; 2]>,
    subscript: Option<String>,
    connectivity: Option<String>,
}

/// S-group properties keyed by their file number, in declaration order.
#[derive(Debug, Default)]
struct SGroups {
    order: Vec<usize>,
    groups: BTreeMap<usize, SGroup>,
}

impl SGroups {
    fn apply(&mut self, raw: &str, ln: usize) -> Result<(), Error> {
        let Some(tag) = raw.get(3..6) else {
            return Ok(());
        };
        if !raw.starts_with("M  ") {
            return Ok(());
        }
        let rest = raw.get(6..).unwrap_or("");
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        let number = |s: &str| {
            s.parse::<usize>()
                .map_err(|_| Error::parse(Format::Mol, ln, format!("invalid number '{s}' in {tag} line")))
        };

        match tag {
            "STY" => {
                for pair in tokens.get(1..).unwrap_or_default().chunks_exact(2) {
                    let id = number(pair[0])?;
                    if !self.order.contains(&id) {
                        self.order.push(id);
                    }
                    self.groups.entry(id).or_default().kind = pair[1].to_string();
                }
            }
            "SAL" | "SBL" => {
                let [id, _count, members @ ..] = tokens.as_slice() else {
                    return Err(Error::parse(Format::Mol, ln, format!("truncated {tag} line")));
                };
                let members = members
                    .iter()
                    .map(|m: &&str| {
                        number(*m)?.checked_sub(1).ok_or_else(|| {
                            Error::parse(Format::Mol, ln, format!("{tag} member numbers start at 1"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let group = self.groups.entry(number(*id)?).or_default();
                if tag == "SAL" {
                    group.atoms.extend(members);
                } else {
                    group.bonds.extend(members);
                }
            }
            "SMT" => {
                let Some(id) = tokens.first() else {
                    return Err(Error::parse(Format::Mol, ln, "truncated SMT line"));
                };
                let text = rest.trim_start().get(id.len()..).unwrap_or("").trim();
                self.groups.entry(number(*id)?).or_default().subscript = Some(text.to_string());
            }
            "SDI" => {
                let [id, _count, coords @ ..] = tokens.as_slice() else {
                    return Err(Error::parse(Format::Mol, ln, "truncated SDI line"));
                };
                let values = coords
                    .iter()
                    .take(4)
                    .map(|c| c.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .ok()
                    .filter(|v| v.len() == 4)
                    .ok_or_else(|| Error::parse(Format::Mol, ln, "SDI line needs four coordinates"))?;
                self.groups.entry(number(*id)?).or_default().lines.push([
                    Point::new(values[0], values[1]),
                    Point::new(values[2], values[3]),
                ]);
            }
            "SCN" => {
                for pair in tokens.get(1..).unwrap_or_default().chunks_exact(2) {
                    self.groups.entry(number(pair[0])?).or_default().connectivity =
                        Some(pair[1].to_lowercase());
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn into_repeat_units(mut self, topology: &Topology) -> Vec<RepeatUnitRecord> {
        let mut units = Vec::new();
        for id in &self.order {
            let Some(group) = self.groups.remove(id) else {
                continue;
            };
            if group.kind != "SRU" {
                log::debug!("skipping S-group {id} of type {}", group.kind);
                continue;
            }
            let mut unit = RepeatUnitRecord::new(group.atoms);
            unit.crossing_bonds = group
                .bonds
                .into_iter()
                .filter(|&b| b < topology.bond_count())
                .collect();
            unit.bracket_lines = group.lines;
            unit.subscript = group.subscript;
            unit.superscript = group.connectivity;
            units.push(unit);
        }
        units
    }
}

use kml_inventory::error::Warning;
use kml_inventory::export::write_routes;
use kml_inventory::inventory::{build_inventory, summarize, InventoryOptions, PLACEHOLDER_NAME};
use kml_inventory::model::{
    CabinetRecord, InventoryReport, LineStyle, NestedRoute, RouteKind, RouteStatus,
};
use kml_inventory::parser::parse_kml_str;
use pretty_assertions::assert_eq;

fn kml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
<name>Projeto</name>
<Style id="vermelho"><LineStyle><color>ff0000ff</color><width>3</width></LineStyle></Style>
<Style id="cidade"><IconStyle><color>ff00ff00</color></IconStyle></Style>
<Style id="torto"><LineStyle><color>ff00f</color></LineStyle></Style>
{body}
</Document>
</kml>"#
    )
}

fn line(name: &str, coords: &str) -> String {
    format!("<Placemark><name>{name}</name><LineString><coordinates>{coords}</coordinates></LineString></Placemark>")
}

fn styled_line(name: &str, style: &str, coords: &str) -> String {
    format!("<Placemark><name>{name}</name><styleUrl>#{style}</styleUrl><LineString><coordinates>{coords}</coordinates></LineString></Placemark>")
}

fn point(name: &str, coords: &str) -> String {
    format!("<Placemark><name>{name}</name><Point><coordinates>{coords}</coordinates></Point></Placemark>")
}

fn folder(name: &str, children: &[String]) -> String {
    format!("<Folder><name>{name}</name>{}</Folder>", children.concat())
}

fn run(body: &str) -> InventoryReport {
    run_with(body, &InventoryOptions::default())
}

fn run_with(body: &str, options: &InventoryOptions) -> InventoryReport {
    let document = parse_kml_str(&kml(body)).expect("valid kml");
    build_inventory(&document, options)
}

const SEGMENT: &str = "-47.0,-15.0,0 -47.1,-15.1,0";

#[test]
fn single_trunk_route() {
    let report = run(&folder("LINK TESTE", &[line("Trecho", "-47.0,-15.0 -47.1,-15.1")]));

    assert_eq!(report.document, "Projeto");
    assert_eq!(report.routes.len(), 1);
    let route = &report.routes[0];
    assert_eq!(route.folder, "LINK TESTE");
    assert_eq!(route.item, "Trecho");
    assert_eq!(route.kind, RouteKind::Trunk);
    assert_eq!(route.color, "#0000FF");
    assert_eq!(route.line_style, LineStyle::Solid);
    assert_eq!(route.status, RouteStatus::Other);
    assert!(
        route.distance_m > 15_000.0 && route.distance_m < 16_000.0,
        "distance {}",
        route.distance_m
    );
    assert!((route.distance_m - route.distance_m.round()).abs() < f64::EPSILON);

    // Only the malformed style color.
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn trunk_subfolders_set_status_and_line_style() {
    let report = run(&folder(
        "LINK NORTE",
        &[
            line("Direto", SEGMENT),
            folder("EM ANDAMENTO", &[line("Obra", SEGMENT)]),
            folder(
                "Concluído",
                &[line("Pronto", SEGMENT), folder("lote 2", &[line("Pronto 2", SEGMENT)])],
            ),
            folder("Reserva", &[line("Extra", SEGMENT)]),
        ],
    ));

    let rows: Vec<(&str, Option<&str>, LineStyle, RouteStatus)> = report
        .routes
        .iter()
        .map(|r| (r.item.as_str(), r.group.as_deref(), r.line_style, r.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Direto", None, LineStyle::Solid, RouteStatus::Other),
            ("Obra", Some("EM ANDAMENTO"), LineStyle::Dashed, RouteStatus::InProgress),
            ("Pronto", Some("Concluído"), LineStyle::Solid, RouteStatus::Completed),
            ("Pronto 2", Some("Concluído"), LineStyle::Solid, RouteStatus::Completed),
            ("Extra", Some("Reserva"), LineStyle::Solid, RouteStatus::Other),
        ]
    );

    let summary = summarize(&report);
    assert_eq!(summary.folders.len(), 1);
    let norte = &summary.folders[0];
    let segment = report.routes[0].distance_m;
    assert!((norte.subtotal_m - 5.0 * segment).abs() < f64::EPSILON);
    assert!((norte.completed_m - 2.0 * segment).abs() < f64::EPSILON);
    assert!((norte.completion_pct - 40.0).abs() < 1e-9);
}

#[test]
fn item_style_wins_over_folder_color() {
    let report = run(&folder(
        "LINK AMARELO",
        &[
            styled_line("Com estilo", "vermelho", SEGMENT),
            line("Sem estilo", SEGMENT),
            styled_line("Estilo quebrado", "torto", SEGMENT),
        ],
    ));

    let colors: Vec<&str> = report.routes.iter().map(|r| r.color.as_str()).collect();
    assert_eq!(colors, vec!["#FF0000", "#FFFF00", "#FFFF00"]);
    assert!(report.warnings.contains(&Warning::MalformedColor {
        style: "torto".to_string(),
        value: "ff00f".to_string(),
    }));
}

#[test]
fn partner_routes_are_flattened_and_kept_apart() {
    let report = run(&[
        folder("LINK VERDE", &[line("Tronco", SEGMENT)]),
        folder(
            "Link Parceiros Amarelo",
            &[
                styled_line("Parceiro", "vermelho", SEGMENT),
                folder("EM ANDAMENTO", &[line("Parceiro 2", SEGMENT)]),
            ],
        ),
    ]
    .concat());

    assert_eq!(report.routes[0].color, "#00FF00");
    let partner: Vec<_> = report
        .routes
        .iter()
        .filter(|r| r.kind == RouteKind::Partner)
        .collect();
    assert_eq!(partner.len(), 2);
    for route in &partner {
        assert_eq!(route.color, "#FF00FF");
        assert_eq!(route.line_style, LineStyle::Solid);
        assert_eq!(route.status, RouteStatus::Other);
    }

    let summary = summarize(&report);
    let segment = report.routes[0].distance_m;
    assert!((summary.trunk_total_m - segment).abs() < f64::EPSILON);
    assert!((summary.partner_total_m - 2.0 * segment).abs() < f64::EPSILON);
}

#[test]
fn nested_link_folder_is_not_counted_twice() {
    let report = run(&folder(
        "Projetos",
        &[folder("LINK SUL", &[folder("LINK SUL 2", &[line("A", SEGMENT)])])],
    ));

    assert_eq!(report.routes.len(), 1);
    assert_eq!(report.routes[0].folder, "LINK SUL");
    assert_eq!(report.routes[0].group.as_deref(), Some("LINK SUL 2"));
}

#[test]
fn hub_with_one_cabinet() {
    let report = run(&folder(
        "GPON CENTRO",
        &[folder(
            "POP1",
            &[folder(
                "CTO'S A",
                &[folder(
                    "ROTA 1",
                    &[point("c1", "-47.0,-15.0"), point("c2", "-47.0,-15.0"), point("c3", "-47.0,-15.0")],
                )],
            )],
        )],
    ));

    assert_eq!(report.pops.len(), 1);
    let pop = &report.pops[0];
    assert_eq!(pop.hub, "GPON CENTRO");
    assert_eq!(pop.name, "POP1");
    assert_eq!(
        pop.cabinets,
        vec![CabinetRecord {
            name: "CTO'S A".to_string(),
            routes: vec![NestedRoute {
                name: "ROTA 1".to_string(),
                item_count: 3,
            }],
        }]
    );
    assert_eq!(pop.route_count(), 1);

    let summary = summarize(&report);
    assert_eq!(summary.pops[0].route_count, 1);
    assert_eq!(summary.pops[0].item_count, 3);
    assert_eq!(summary.hubs[0].pop_count, 1);
}

#[test]
fn cabinet_reached_twice_in_one_pop_is_counted_once() {
    let cabinet = folder("CTO'S B", &[folder("ROTA X", &[point("p", "-47.0,-15.0")])]);
    let report = run(&folder(
        "GPON LESTE",
        &[
            folder(
                "POP1",
                &[folder("Quadra 1", &[cabinet.clone()]), folder("Quadra 2", &[cabinet.clone()])],
            ),
            folder("POP2", &[cabinet]),
        ],
    ));

    assert_eq!(report.pops.len(), 2);
    assert_eq!(report.pops[0].cabinets.len(), 1);
    // A different POP has its own visited set.
    assert_eq!(report.pops[1].cabinets.len(), 1);
}

#[test]
fn pop_fiber_length_uses_direct_lines_only() {
    let report = run(&folder(
        "GPON NORTE",
        &[folder(
            "POP1",
            &[
                line("Backbone", SEGMENT),
                point("Caixa", "-47.0,-15.0"),
                folder("CTO'S C", &[folder("ROTA", &[line("Drop", SEGMENT)])]),
            ],
        )],
    ));

    let pop = &report.pops[0];
    assert!(pop.fiber_length_m > 15_000.0 && pop.fiber_length_m < 16_000.0);
    assert_eq!(pop.cabinets[0].routes[0].item_count, 1);
    // Lines under a hub are not trunk routes.
    assert!(report.routes.is_empty());
}

#[test]
fn city_markers_use_style_or_default_color() {
    let report = run(&folder(
        "CIDADES",
        &[
            "<Placemark><name>Brasília</name><styleUrl>#cidade</styleUrl>\
             <Point><coordinates>-47.88,-15.79,0</coordinates></Point></Placemark>"
                .to_string(),
            folder("Interior", &[point("Goiânia", "-49.25,-16.68")]),
            line("Estrada", SEGMENT),
        ],
    ));

    assert_eq!(report.cities.len(), 2);
    assert_eq!(report.cities[0].name, "Brasília");
    assert_eq!(report.cities[0].color.as_deref(), Some("#00FF00"));
    assert!((report.cities[0].coordinate.lat - -15.79).abs() < 1e-9);
    assert!((report.cities[0].coordinate.lon - -47.88).abs() < 1e-9);
    assert_eq!(report.cities[1].color.as_deref(), Some("#FF0000"));
    assert_eq!(summarize(&report).city_count, 2);
}

#[test]
fn malformed_coordinates_skip_only_that_item() {
    let report = run(&folder(
        "LINK OESTE",
        &[
            line("Bom", SEGMENT),
            line("Ruim", "-47.0;-15.0 -47.1,-15.1"),
            line("Bom 2", SEGMENT),
        ],
    ));

    let items: Vec<&str> = report.routes.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["Bom", "Bom 2"]);
    assert!(report.warnings.iter().any(|w| matches!(
        w,
        Warning::MalformedCoordinate { folder, item, .. } if folder == "LINK OESTE" && item == "Ruim"
    )));
}

#[test]
fn missing_names_get_placeholder() {
    let report = run(&folder(
        "LINK X",
        &[format!("<Placemark><LineString><coordinates>{SEGMENT}</coordinates></LineString></Placemark>")],
    ));

    assert_eq!(report.routes[0].item, PLACEHOLDER_NAME);
    assert!(report.warnings.contains(&Warning::MissingName {
        element: "placemark".to_string(),
    }));
}

#[test]
fn depth_limit_is_a_warning() {
    let mut nested = folder("LINK FUNDO", &[line("A", SEGMENT)]);
    for level in 0..5 {
        nested = folder(&format!("nivel {level}"), &[nested]);
    }
    let options = InventoryOptions {
        max_depth: 3,
        ..InventoryOptions::default()
    };
    let report = run_with(&nested, &options);

    assert!(report.routes.is_empty());
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, Warning::DepthExceeded { depth: 4, .. })));

    let report = run(&nested);
    assert_eq!(report.routes.len(), 1);
}

fn multi(name: &str, members: &[String]) -> String {
    format!("<Placemark><name>{name}</name><MultiGeometry>{}</MultiGeometry></Placemark>", members.concat())
}

fn line_member(coords: &str) -> String {
    format!("<LineString><coordinates>{coords}</coordinates></LineString>")
}

fn point_member(coords: &str) -> String {
    format!("<Point><coordinates>{coords}</coordinates></Point>")
}

#[test]
fn multi_geometry_gives_one_route_per_line() {
    let report = run(&folder(
        "LINK X",
        &[
            multi("Duplo", &[line_member(SEGMENT), line_member(SEGMENT)]),
            multi("Misto", &[point_member("-47.0,-15.0"), line_member(SEGMENT)]),
        ],
    ));

    let items: Vec<&str> = report.routes.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["Duplo", "Duplo", "Misto"]);
    let segment = report.routes[0].distance_m;
    assert!(segment > 15_000.0 && segment < 16_000.0);
    assert!(report.routes.iter().all(|r| r.distance_m == segment));
    assert_eq!(summarize(&report).trunk_total_m, 3.0 * segment);
}

#[test]
fn pop_fiber_length_counts_every_line_of_a_placemark() {
    let report = run(&folder(
        "GPON SUL",
        &[folder(
            "POP1",
            &[multi("Anel", &[line_member(SEGMENT), line_member(SEGMENT)])],
        )],
    ));

    let fiber = report.pops[0].fiber_length_m;
    assert!(fiber > 30_000.0 && fiber < 32_000.0);
}

#[test]
fn city_marker_from_point_only_multi_geometry() {
    let report = run(&folder(
        "CIDADES",
        &[
            multi("Anápolis", &[point_member("-48.95,-16.33")]),
            multi("Misto", &[point_member("-47.0,-15.0"), line_member(SEGMENT)]),
        ],
    ));

    let names: Vec<&str> = report.cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Anápolis"]);
}

#[test]
fn cabinet_routes_count_only_placemarks_with_geometry() {
    let report = run(&folder(
        "GPON OESTE",
        &[folder(
            "POP1",
            &[folder(
                "CTO'S D",
                &[folder(
                    "ROTA 1",
                    &[
                        point("c1", "-47.0,-15.0"),
                        line("Drop", SEGMENT),
                        "<Placemark><name>Anotação</name></Placemark>".to_string(),
                    ],
                )],
            )],
        )],
    ));

    assert_eq!(report.pops[0].cabinets[0].routes[0].item_count, 2);
}

#[test]
fn nesting_past_parser_limit_is_a_warning() {
    let mut nested = folder("LINK FUNDO", &[line("A", SEGMENT)]);
    for _ in 0..600 {
        nested = folder("nivel", &[nested]);
    }
    let options = InventoryOptions {
        max_depth: 10_000,
        ..InventoryOptions::default()
    };
    let report = run_with(&nested, &options);

    assert!(report.routes.is_empty());
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, Warning::DepthExceeded { depth: 513, .. })));
}

#[test]
fn route_table_csv() {
    let report = run(&folder(
        "LINK TESTE",
        &[folder("EM ANDAMENTO", &[line("Trecho", SEGMENT)])],
    ));
    let mut out = Vec::new();
    write_routes(&report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Folder,Group,Item,Distance (m),Color,Line Style,Status");
    assert_eq!(
        lines[1],
        format!(
            "LINK TESTE,EM ANDAMENTO,Trecho,{:.0},#0000FF,dashed,in_progress",
            report.routes[0].distance_m
        )
    );
}

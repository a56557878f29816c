use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::PieChart;
use crate::core::summary::{Summary, SummaryLogic, SummaryRequest};
use crate::errors::AppResult;
use crate::load::{load_records, resolve_source};
use crate::ui::messages::{header, set_quiet, warning};
use crate::utils::formatting::{bold, hours_decimal, hours2readable, percent, share_bar};
use crate::utils::range::parse_range;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        source,
        range,
        by,
        project,
        tag,
        day_type,
        average,
        json,
    } = cmd
    {
        if *json {
            set_quiet(true);
        }

        let path = resolve_source(source.as_deref(), cfg)?;
        let records = load_records(&path, cfg)?;

        let range = match range {
            Some(r) => parse_range(r)?,
            None => SummaryLogic::default_range(&records),
        };

        let req = SummaryRequest {
            range,
            by: *by,
            project: project.clone(),
            tag: tag.clone(),
            day_type: *day_type,
            average: *average,
        };

        let summary = SummaryLogic::build(&records, &req);

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary);
        }
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    let span = match summary.range {
        Some((start, end)) => format!("{start} → {end}"),
        None => "all rows".to_string(),
    };

    header(format!("Time breakdown ({span}, {} days)", summary.day_type.as_str()));
    println!(
        "{} {:.2} ({})",
        bold("Total Hours in Selected Range:"),
        summary.total_hours,
        hours2readable(summary.total_hours)
    );
    println!(
        "Rows: {} | Days: {}{}\n",
        summary.rows,
        summary.total_days,
        if summary.average {
            " | values in hours/day"
        } else {
            ""
        }
    );

    print_pie(&summary.main);
    if let Some(tags) = &summary.tags {
        print_pie(tags);
    }
    if let Some(projects) = &summary.projects_for_tag {
        print_pie(projects);
    }
}

fn print_pie(pie: &PieChart) {
    println!("{}", bold(&pie.title));

    if let Some(msg) = &pie.empty_message {
        warning(msg);
        println!();
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Label"),
        Column::right("Hours"),
        Column::right("Percent"),
        Column::right("Count"),
        Column::left(""),
    ]);

    for slice in &pie.slices {
        table.add_row(vec![
            slice.label.clone(),
            hours_decimal(slice.hours),
            percent(slice.percent),
            slice.count.to_string(),
            share_bar(slice.percent, 20),
        ]);
    }

    println!("{}", table.render());
}

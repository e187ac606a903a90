use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::data::filter::Filters;
use crate::data::loader;
use crate::data::model::TripTable;
use crate::pager::{self, RawDataPager};
use crate::prompt;
use crate::stats;

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

pub struct App {
    data_dir: PathBuf,
}

impl App {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Run the interactive session loop on stdin.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        self.run_with(&mut stdin.lock())
    }

    /// Prompt → load → raw-data offer → reporters → restart, until the user
    /// declines or the input closes. Every iteration re-loads the source
    /// file; nothing is cached across iterations.
    pub fn run_with(&self, input: &mut impl BufRead) -> Result<()> {
        println!("Hello! Let's explore some US bikeshare data!\n");

        loop {
            let Some(city) = prompt::read_city(input)? else { break };
            let Some(month) = prompt::read_month(input)? else { break };
            let Some(day) = prompt::read_day(input)? else { break };
            let filters = Filters { month, day };

            let table = loader::load_data(&self.data_dir, city, &filters)
                .with_context(|| format!("loading trip data for {city}"))?;
            info!("{city}: exploring {} trips ({filters})", table.len());

            offer_raw_data(input, &table)?;

            stats::time::report(&table);
            stats::station::report(&table);
            stats::duration::report(&table);
            stats::users::report(&table);

            match prompt::read_yes_no(input, "\nWould you like to restart? (yes/no) ")? {
                Some(true) => continue,
                _ => break,
            }
        }

        Ok(())
    }
}

/// Offer the filtered table 5 rows at a time, stopping on the first
/// negative answer or at the end of the data. A "yes" on an already-empty
/// table reveals nothing and is not an error.
fn offer_raw_data(input: &mut impl BufRead, table: &TripTable) -> io::Result<()> {
    let mut pager = RawDataPager::new(table);
    let mut question = "Do you want to see 5 lines of raw data? (yes/no) ";

    while prompt::read_yes_no(input, question)? == Some(true) {
        let first = pager.position();
        let page = pager.next_page();
        if page.is_empty() {
            println!("No raw data to show.");
        } else {
            for (offset, trip) in page.iter().enumerate() {
                pager::print_trip(first + offset, trip);
            }
        }
        if pager.is_exhausted() {
            println!("\nThat is all of the raw data.");
            break;
        }
        question = "\nWould you like to see the next 5 rows of raw data? (yes/no) ";
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use crate::data::model::City;

    use super::*;

    const CHICAGO: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-03-06 09:15:00,2017-03-06 09:30:00,900.0,Clark St,State St,Subscriber,Male,1989.0
2017-03-07 10:00:00,2017-03-07 10:10:00,600.0,State St,Clark St,Customer,Female,1992.0
2017-03-08 08:30:00,2017-03-08 08:40:00,600.0,Oak St,Clark St,Subscriber,Male,1975.0
2017-03-09 17:20:00,2017-03-09 17:45:00,1500.0,Clark St,Oak St,Subscriber,Female,1990.0
2017-03-10 12:00:00,2017-03-10 12:05:00,300.0,Elm St,State St,Customer,,
2017-03-11 09:10:00,2017-03-11 09:55:00,2700.0,State St,Elm St,Subscriber,Male,1989.0
2017-03-13 17:45:00,2017-03-13 18:00:00,,Wells St,Clark St,Subscriber,Male,1989.0
2017-04-03 09:05:00,2017-04-03 09:25:00,1200.0,Clark St,Wells St,Subscriber,,
";

    const WASHINGTON: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-05 08:00:00,2017-06-05 08:30:00,1800.0,4th St,Main St,Registered
";

    fn app(files: &[(City, &str)]) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        for (city, contents) in files {
            fs::write(dir.path().join(city.file_name()), contents).unwrap();
        }
        (App::new(dir.path().to_path_buf()), dir)
    }

    #[test]
    fn full_session_with_raw_data_and_restart() {
        let (app, _dir) = app(&[(City::Chicago, CHICAGO), (City::Washington, WASHINGTON)]);
        // Chicago/March/all has 7 rows: a full raw page, then the remainder
        // page ends the pagination. Restart into a Washington run
        // (demographics absent), then quit.
        let script = "chicago\nmarch\nall\nyes\nyes\nyes\n\
                      washington\nall\nmonday\nno\nno\n";
        app.run_with(&mut Cursor::new(script)).unwrap();
    }

    #[test]
    fn invalid_prompt_answers_are_recovered_locally() {
        let (app, _dir) = app(&[(City::Chicago, CHICAGO)]);
        let script = "narnia\nchicago\nsmarch\nmarch\nsomeday\nall\nmaybe\nno\nno\n";
        app.run_with(&mut Cursor::new(script)).unwrap();
    }

    #[test]
    fn empty_filter_result_runs_all_reporters() {
        let (app, _dir) = app(&[(City::Chicago, CHICAGO)]);
        // December matches no rows; every reporter must take its no-data
        // path without failing, including a raw-data request on zero rows.
        let script = "chicago\ndecember\nall\nyes\nno\nno\n";
        app.run_with(&mut Cursor::new(script)).unwrap();
    }

    #[test]
    fn eof_ends_the_session_cleanly() {
        let (app, _dir) = app(&[(City::Chicago, CHICAGO)]);
        app.run_with(&mut Cursor::new("")).unwrap();
        app.run_with(&mut Cursor::new("chicago\nmarch\n")).unwrap();
    }

    #[test]
    fn missing_source_file_is_fatal_and_names_the_file() {
        let (app, _dir) = app(&[]);
        let err = app
            .run_with(&mut Cursor::new("chicago\nall\nall\n"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("chicago.csv"));
    }
}

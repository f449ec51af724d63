use chrono::Utc;
use luach::{first_day_of_year, molad_of_year, year_length, JewishDate, YearKind};

fn main() -> Result<(), luach::CalendarError> {
    let today = JewishDate::from_date(Utc::now().date_naive())?;
    let next_year = today.year() + 1;

    println!("Today: {today} ({today:#})");
    println!("Weekday: {:?}", today.day_of_week()?);
    println!(
        "Year {}: {} days, {:?}",
        today.year(),
        year_length(today.year())?,
        YearKind::of(today.year())?
    );
    println!("Molad of Tishrei {next_year}: {}", molad_of_year(next_year)?);

    let rosh_hashanah = JewishDate::from_sdn(first_day_of_year(next_year)?)?;
    println!("Rosh Hashanah {next_year}: {}", rosh_hashanah.to_date()?);
    Ok(())
}

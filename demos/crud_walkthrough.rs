//
// Copyright (c) 2024 Nathan Fiedler
//
// Runs create, update, and delete against a running server, listing the
// records after each step. Start the server with `DB_PATH=:memory:` first.
//
use employee_records::domain::entities::{Employee, Notice, Outcome};
use std::env;

type DemoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

async fn list(client: &reqwest::Client, base: &str) -> DemoResult<Vec<Employee>> {
    let res = client.get(format!("{}/employees", base)).send().await?;
    let raw_text = res.text().await?;
    let employees: Vec<Employee> = serde_json::from_str(&raw_text)?;
    for employee in employees.iter() {
        println!("  {} | {} | {}", employee.id, employee.name, employee.email);
    }
    Ok(employees)
}

async fn report(res: reqwest::Response) -> DemoResult<()> {
    let status = res.status();
    let raw_text = res.text().await?;
    if status == 200 {
        let outcome: Outcome = serde_json::from_str(&raw_text)?;
        println!("{} ({} row)", outcome.notice, outcome.affected);
    } else {
        let notice: Notice = serde_json::from_str(&raw_text)?;
        println!("{} [{}]", notice, status);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> DemoResult<()> {
    let base = env::var("BASE_URI").unwrap_or_else(|_| "http://127.0.0.1:3000".to_owned());
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/employees", base))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ann&email=ann%40x.com")
        .send()
        .await?;
    report(res).await?;
    let employees = list(&client, &base).await?;
    let ann = employees
        .iter()
        .find(|e| e.name == "Ann")
        .ok_or("inserted record not listed")?;

    let res = client
        .put(format!("{}/employees/{}", base, ann.id))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ann+B&email=annb%40x.com")
        .send()
        .await?;
    report(res).await?;
    list(&client, &base).await?;

    for _ in 0..2 {
        let res = client
            .delete(format!("{}/employees/{}", base, ann.id))
            .send()
            .await?;
        report(res).await?;
        list(&client, &base).await?;
    }
    Ok(())
}

pub async fn hello_investmatch() -> &'static str {
    "Hello from InvestMatch Backend!"
}

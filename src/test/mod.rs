mod calc;
mod portfolio;
mod quote_fetcher;
mod yahoo;

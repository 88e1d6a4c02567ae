pub mod checkout_book_cmd;
pub mod get_checkout_cmd;
pub mod list_customer_books_cmd;
pub mod return_book_cmd;

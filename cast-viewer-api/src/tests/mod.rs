mod api_doc_tests;
mod cards_tests;

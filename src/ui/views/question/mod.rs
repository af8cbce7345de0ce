pub mod character_order;
pub mod choice_list;
pub mod combination;
pub mod image_choice;
pub mod media;
pub mod multi_answer;
pub mod number_input;
pub mod order_selection;

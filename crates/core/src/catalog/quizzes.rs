use crate::model::{AnswerOption, Question, QuizId, QuizPack};

const fn option(text: &'static str, correct: bool) -> AnswerOption {
    if correct {
        AnswerOption::correct(text)
    } else {
        AnswerOption::new(text)
    }
}

const fn q(prompt: &'static str, options: [&'static str; 3], correct: usize) -> Question {
    Question::new(
        prompt,
        [
            option(options[0], correct == 0),
            option(options[1], correct == 1),
            option(options[2], correct == 2),
        ],
    )
}

pub(super) static QUIZ_PACKS: [QuizPack; 3] = [
    QuizPack::new(QuizId::Quiz1, "Quiz 1", QUIZ_1),
    QuizPack::new(QuizId::Quiz2, "Quiz 2", QUIZ_2),
    QuizPack::new(QuizId::Quiz3, "Quiz 3", QUIZ_3),
];

const QUIZ_1: &[Question] = &[
    q("Which river flows through Basel?", ["Danube", "Rhine", "Seine"], 1),
    q("The main cathedral of Basel is called:", ["Basel Minster", "St. Peter", "Grosskirche"], 0),
    q(
        "The oldest bridge over the Rhine in Basel:",
        ["Mittlere Brücke", "Trinity Bridge", "Old Cross"],
        0,
    ),
    q("What color is the Basel town hall?", ["Blue", "Red", "White"], 1),
    q("What is the name of the old town of Basel?", ["Altstadt", "Downtown", "Old Core"], 0),
    q("Medieval gate tower:", ["Spalentor", "City Gate", "North Tower"], 0),
    q(
        "Famous kinetic fountain in the center:",
        ["Tinguely Fountain", "Art Well", "Motion Pool"],
        0,
    ),
    q("Main square with market:", ["Marktplatz", "Central Square", "Market Hall"], 0),
    q(
        "Museum of modern art next to the park:",
        ["Fondation Beyeler", "Art House", "Modern Hall"],
        0,
    ),
    q("River divides the city into two parts:", ["Rhine", "Main", "Po"], 0),
];

const QUIZ_2: &[Question] = &[
    q("The tallest building in Basel:", ["Roche Tower", "City Spire", "Basel Point"], 0),
    q("The ancient city gate:", ["Spalentor", "West Gate", "Iron Gate"], 0),
    q("Museum of moving sculptures:", ["Museum Tinguely", "Motion Art", "Steel Lab"], 0),
    q("Canal district:", ["St. Alban", "Old Port", "Water Town"], 0),
    q("Main Market Square:", ["Marktplatz", "Food Square", "Trade Yard"], 0),
    q("Summer Swimming River:", ["Rhine", "Aare", "Rhône"], 0),
    q("Paper and Printing Museum:", ["Paper Mill", "Print House", "Ink Lab"], 0),
    q("Architectural Campus Near the City:", ["Vitra Campus", "Design Park", "Build Zone"], 0),
    q(
        "Bridge Between Three Countries:",
        ["Three Countries Bridge", "Unity Bridge", "Border Way"],
        0,
    ),
    q("Old Town Center:", ["Altstadt", "Old Town", "Core City"], 0),
    q("Cathedral Towers by Number:", ["Two", "Three", "One"], 0),
    q("Fountain Near the Theater:", ["Tinguely Fountain", "Opera Well", "City Flow"], 0),
    q("District Along Rhine:", ["Rhine Promenade", "River Walk", "Blue Line"], 0),
    q("Modern symbol of the city:", ["Roche Tower", "Clock Hall", "Glass Dome"], 0),
    q("The city is known for art:", ["Yes", "No", "Partially"], 0),
];

const QUIZ_3: &[Question] = &[
    q("Basel's main river:", ["Rhine", "Main", "Po"], 0),
    q("Red government building:", ["Town Hall", "City Court", "State House"], 0),
    q("Museum of Modern Art:", ["Fondation Beyeler", "Art Base", "Modern Hub"], 0),
    q("Medieval gate:", ["Spalentor", "Old Gate", "North Arch"], 0),
    q("Tallest skyscraper:", ["Roche Tower", "Basel Rise", "Sky Point"], 0),
    q("Old bridge over the Rhine:", ["Mittlere Brücke", "Stone Way", "Old Line"], 0),
    q("Kinetic fountain:", ["Tinguely Fountain", "Motion Pool", "Art Drop"], 0),
    q("Canal district:", ["St. Alban", "Water Side", "Mill Town"], 0),
    q("Main Square:", ["Marktplatz", "City Square", "Trade Point"], 0),
    q("Paper Museum:", ["Paper Mill", "Book Hall", "Print Lab"], 0),
    q("Promenade:", ["Rhine Promenade", "River Park", "Water Lane"], 0),
    q("Architecture Campus:", ["Vitra Campus", "Design Yard", "Build Lab"], 0),
    q("Museum of Movement and Mechanics:", ["Museum Tinguely", "Steel Art", "Motion Lab"], 0),
    q("Church with neo-Gothic:", ["Elisabethenkirche", "City Chapel", "Old Church"], 0),
    q("Church-museum in the center:", ["Barfüsserkirche", "Art Church", "Stone Hall"], 0),
    q("Bridge between countries:", ["Three Countries Bridge", "Border Bridge", "Unity Way"], 0),
    q("Part of the city with history:", ["Altstadt", "Old Zone", "Core"], 0),
    q("The city is located in:", ["Switzerland", "France", "Germany"], 0),
    q("A river divides the city:", ["Yes", "No", "Partially"], 0),
    q("Basel is a cultural center:", ["Yes", "No", "Maybe"], 0),
];

//! Built-in Spanish word and sentence lists
//!
//! Accented letters are rendered through the custom glyphs.

/// Words, alphabetical by first letter
pub const WORDS: &[&str] = &[
    "a",
    "animales",
    "amarillo",
    "amarilla",
    "ama",
    "amo",
    "anaranjada",
    "anaranjado",
    "abajo",
    "al",
    "azul",
    "amigos",
    "abeja",
    "árbol",
    "arbolito",
    "adentro",
    "Adrían",
    "Adriana",
    "Ariana",
    "Arco iris",
    "arriba",

    "con",
    "columpios",
    "carritos",
    "contigo",
    "camello",
    "cebra",
    "chocolate",
    "café",
    "caer",
    "cuatro",
    "círculo",
    "cuadrado",

    "dos",
    "del",
    "debajo",

    "escondidas",
    "en",
    "el",
    "es",
    "escoba",
    "elefante",
    "escalera",
    "estrellas",
    "escuela",
    "enfermera",
    "este",
    "Exjani",
    "Emma",

    "gorilla",
    "gato",
    "gusta",
    "que",

    "hiena",
    "hacer",
    "hipopótamo",
    "hoja",
    "hasta",

    "iguana",
    "iguanas",
    "iglú",
    "insectos",
    "isla",
    "idea",
    "igual",
    "instrumento",

    "jugar",

    "la",
    "las",
    "los",
    "libro",
    "lo",

    "mi",
    "mí",
    "mis",
    "me",
    "más",
    "murciélago",
    "muchos",
    "mapa",
    "manzana",
    "mano",
    "manos",
    "mariposa",
    "mango",
    "muñeca",
    "mono",
    "mamá",
    "Mireya",
    "Marissa",
    "Maren",
    "Melina",

    "negro",
    "nariz",

    "oso",
    "ocho",
    "oveja",
    "ojo",
    "once",
    "oído",
    "óvalo",
    "oruga",
    "ola",
    "otoño",

    "puedo",
    "pelota",
    "perro",
    "pero",
    "pelo",
    "puedes",
    "patín",
    "pavo",
    "pato",
    "papá",
    "papa",
    "puma",
    "pomo",
    "payaso",
    "pavo",
    "pluma",

    "qué",

    "rana",
    "roja",
    "rojo",
    "regalos",
    "réctangulo",

    "silla",
    "suelo",
    "sé",
    "sombrero",

    "tobogán",
    "tiburón",
    "tres",
    "triángulo",
    "tengo",
    "traje",

    "una",
    "uña",
    "uno",
    "un",
    "uvas",
    "último",
    "unicornio",
    "universo",

    "ver",
    "verde",

    "yo",

    "zapatos",
];

/// Sentences, grouped by lesson
pub const SENTENCES: &[&str] = &[
    "Me gusta ver una rana.",
    "Me gusta ver un perro.",
    "Me gusta ver un gato.",
    "Me gusta ver un oso.",
    "Me gusta ver una silla.",
    "Pero lo que más me gusta ver es un libro.",
    "A mí me gusta el chocolate.",

    "Que puedes hacer?",
    "Yo puedo jugar en los columpios.",
    "Yo puedo jugar con la pelota.",
    "Yo puedo jugar con mis carritos.",
    "Yo puedo jugar a las escondidas.",
    "Yo puedo jugar con mi patín.",
    "Yo puedo jugar en el tobogán.",
    "Yo puedo jugar contigo.",

    "Me gusta el pato amarillo.",
    "Me gusta la pelota roja.",
    "Me gusa el pavo café.",
    "Me gusta el perro negro.",

    "Qué puedes ver?",
    "Yo puedo ver una cebra.",
    "Yo puedo ver un camello.",
    "Yo puedo ver un tiburón.",
    "Yo puedo ver un hipopótamo.",
    "Yo puedo ver una hiena.",
    "Yo puedo ver un gorila.",
    "Yo puedo ver muchos animales.",

    "Hojas de otoño",
    "Una hoja verde.",
    "Una hoja roja.",
    "Una hoja amarilla.",
    "Una hoja anaranjada.",
    "Una hoja café.",
    "Hasta caer al suelo.",

    "Tengo cuatro regalos.",
    "Debajo del arbolito.",
    "Uno es un círculo.",
    "Qué está adentro?",
    "Yo no sé.",
    "Uno es un cuadrado.",
    "Uno es un retángulo.",
    "Uno es un triángulo.",
    "Tengo cuatro regalos debajo del arbolito.",
    "Todos son para mí!",

    "Es una manzana roja.",
    "Es una manzana verde.",
    "Es una manzana blanca.",
    "Es una manzana café.",

    "Este payaso tiene el sombrero morado.",
    "Este payaso tiene pelo verde.",
    "Este payaso tiene la nariz roja.",
    "Este payaso tiene la manos cafés.",
    "Este payaso tiene el traje amarillo.",
    "Este payaso tiene los zapatos azules.",
    "Este es un payaso arco iris!",

    "El pavo tiene una pluma roja.",
    "El pavo tiene una pluma verde.",
    "El pavo tiene una pluma anaranjada.",
    "El pavo tiene una pluma azul.",
    "El pavo tiene una pluma café.",
    "El pavo tiene una pluma amarilla.",
    "El pavo tiene una pluma morada.",
    "Qué pavo más rico!",

    "Yo veo la mariposa.",
    "Me gusta la mariposa.",
    "Yo veo el mango.",
    "Me gusta el mango.",
    "Yo veo el mono.",
    "Me gusta el mono.",
    "Yo veo la muñeca.",
    "Me gusta la muñeca.",
];

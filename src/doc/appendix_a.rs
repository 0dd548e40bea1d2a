/*!
# Errors

Compilation stops at the first error. No C file is written.

## ILLEGAL CHARACTER
The source contains something that is not part of the language, such as
`@`, a lone `!`, a number ending in `.`, or a string that is not closed
on the same line. Strings may not contain tab, backslash or `%`.

## SYNTAX ERROR
A statement does not follow the grammar. The message names the expected
token and the one found.
```text
PRINT "no newline at end of file"
```

Names that C reserves, such as `int`, `while`, `printf` or `EOF`, cannot be
used for variables or labels.
```text
LET int = 1
```

## UNDEFINED VARIABLE
A variable was read before any `LET` or `INPUT` for it.
```text
PRINT x
LET x = 1
```

## DUPLICATE LABEL
The same name follows `LABEL` twice.

## UNDEFINED LABEL
A `GOTO` names a label that is never declared anywhere in the program.
This is checked after the whole program has been read.

## DISK I/O ERROR
The source file could not be read or the output could not be written.

*/
